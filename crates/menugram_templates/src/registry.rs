//! The single style-to-attributes table shared by every renderer.

use menugram_core::{StyleAttributes, StyleKey};
use strum::IntoEnumIterator;

/// Maps style keys to presentation attributes.
///
/// `resolve` is total: any key outside the closed set resolves to the elegant
/// bundle.
///
/// # Examples
///
/// ```
/// use menugram_core::StyleKey;
/// use menugram_templates::StyleRegistry;
///
/// let registry = StyleRegistry::new();
/// assert_eq!(*registry.resolve("bold").key(), StyleKey::Bold);
/// assert_eq!(registry.resolve("neon"), registry.resolve("elegant"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRegistry;

impl StyleRegistry {
    /// Creates the registry.
    pub fn new() -> Self {
        Self
    }

    /// Attributes for a free-text style key, elegant when unrecognized.
    pub fn resolve(&self, key: &str) -> StyleAttributes {
        self.attributes(StyleKey::parse_or_default(key))
    }

    /// Attributes for a known style key.
    pub fn attributes(&self, key: StyleKey) -> StyleAttributes {
        match key {
            StyleKey::Minimal => StyleAttributes::new(
                key,
                ("white", "gray-100"),
                "gray-900",
                "gray-600",
                "white/95",
                "gray-100",
            ),
            StyleKey::Elegant => StyleAttributes::new(
                key,
                ("gray-900", "black"),
                "white",
                "gray-300",
                "black/20",
                "white/10",
            ),
            StyleKey::Bold => StyleAttributes::new(
                key,
                ("pink-500", "purple-600"),
                "white",
                "pink-100",
                "white/20",
                "white/20",
            ),
            StyleKey::Playful => StyleAttributes::new(
                key,
                ("orange-400", "pink-500"),
                "white",
                "orange-100",
                "white/20",
                "white/20",
            ),
        }
    }

    /// Every bundle, in key order.
    pub fn all(&self) -> Vec<StyleAttributes> {
        StyleKey::iter().map(|key| self.attributes(key)).collect()
    }
}
