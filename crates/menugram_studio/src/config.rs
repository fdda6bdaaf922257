//! Studio configuration.
//!
//! Settings come from TOML with three layers, later layers winning:
//! - Bundled defaults (include_str! from menugram.toml)
//! - `~/.config/menugram/menugram.toml`
//! - `./menugram.toml`

use config::{Config, File, FileFormat};
use menugram_core::{Flow, StyleKey, parse_brand_colors};
use menugram_error::{ConfigError, MenugramError, MenugramResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../menugram.toml");

/// Simulated latency settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Delay before generated content is published, in milliseconds
    pub delay_ms: u64,
    /// Delay before a regenerated caption is published, in milliseconds
    pub regenerate_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            regenerate_delay_ms: 1500,
        }
    }
}

impl GenerationConfig {
    /// Generation delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Regeneration delay as a duration.
    pub fn regenerate_delay(&self) -> Duration {
        Duration::from_millis(self.regenerate_delay_ms)
    }
}

/// Hashtag caps per caller profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HashtagConfig {
    /// Cap for restaurant posts and the menu pipeline
    pub post_cap: usize,
    /// Cap for single-item posts, stories and QR scans
    pub item_cap: usize,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        Self {
            post_cap: Flow::Post.default_hashtag_cap(),
            item_cap: Flow::Item.default_hashtag_cap(),
        }
    }
}

/// Values used when the operator leaves a field blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Style key
    pub style: String,
    /// Comma-separated brand colors
    pub brand_colors: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            style: StyleKey::default().to_string(),
            brand_colors: "#FF6B6B,#4ECDC4".to_string(),
        }
    }
}

/// Preview layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Hashtags shown under a post mockup
    pub post_hashtags: usize,
    /// Hashtags shown on a story mockup
    pub story_hashtags: usize,
    /// Characters of item description shown on a post before `...`
    pub description_limit: usize,
    /// Characters of item description shown on a story before `...`
    pub story_description_limit: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            post_hashtags: 4,
            story_hashtags: 3,
            description_limit: 60,
            story_description_limit: 80,
        }
    }
}

/// Top-level studio configuration.
///
/// # Example
///
/// ```no_run
/// use menugram_studio::StudioConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StudioConfig::load()?;
/// println!("Post hashtag cap: {}", config.hashtags.post_cap);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StudioConfig {
    /// Simulated latency
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Hashtag caps
    #[serde(default)]
    pub hashtags: HashtagConfig,

    /// Form defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Preview layout
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl StudioConfig {
    /// Load configuration from a specific file, layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MenugramResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                MenugramError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MenugramError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed, or the merged
    /// configuration fails validation.
    #[instrument]
    pub fn load() -> MenugramResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/menugram/menugram.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("menugram").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                MenugramError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MenugramError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Bundled defaults only, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> MenugramResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                MenugramError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }

    /// Reject settings the studio cannot work with.
    ///
    /// The template engine silently falls back to elegant for unknown styles;
    /// a configured default style must name one of the four keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hashtags.post_cap == 0 {
            return Err(ConfigError::new(
                "hashtags.post_cap must be greater than zero",
            ));
        }
        if self.hashtags.item_cap == 0 {
            return Err(ConfigError::new(
                "hashtags.item_cap must be greater than zero",
            ));
        }
        if StyleKey::from_str(&self.defaults.style).is_err() {
            return Err(ConfigError::new(format!(
                "defaults.style '{}' is not one of minimal, elegant, bold, playful",
                self.defaults.style
            )));
        }
        Ok(())
    }

    /// Hashtag cap for a flow.
    pub fn hashtag_cap(&self, flow: Flow) -> usize {
        match flow {
            Flow::Post | Flow::Batch => self.hashtags.post_cap,
            Flow::Item => self.hashtags.item_cap,
        }
    }

    /// Default brand colors as tokens.
    pub fn default_brand_colors(&self) -> Vec<String> {
        parse_brand_colors(&self.defaults.brand_colors)
    }

    /// `style` if non-blank, else the configured default style.
    pub fn style_or_default(&self, style: Option<&str>) -> String {
        style
            .map(str::trim)
            .filter(|style| !style.is_empty())
            .unwrap_or(&self.defaults.style)
            .to_string()
    }

    /// `colors` parsed if non-blank, else the configured default colors.
    pub fn colors_or_default(&self, colors: Option<&str>) -> Vec<String> {
        match colors.map(parse_brand_colors) {
            Some(parsed) if !parsed.is_empty() => parsed,
            _ => self.default_brand_colors(),
        }
    }
}
