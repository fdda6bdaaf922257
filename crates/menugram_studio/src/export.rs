//! Clipboard and download text.
//!
//! The template engine only hands back raw fields. Every joined form a user
//! can copy or download is built here.

use menugram_core::GeneratedContent;
use menugram_error::{ExportError, ExportErrorKind, JsonError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// File name used for downloads.
pub const DOWNLOAD_FILE_NAME: &str = "instagram-content.txt";

/// `handle + " " + caption`.
pub fn caption_line(handle: &str, caption: &str) -> String {
    format!("{handle} {caption}")
}

/// Hashtags joined by single spaces.
pub fn hashtag_line(hashtags: &[String]) -> String {
    hashtags.join(" ")
}

/// The "copy full caption" text: handle, caption, a blank line, hashtags.
///
/// # Examples
///
/// ```
/// use menugram_core::{GeneratedContent, StyleKey};
/// use menugram_studio::full_caption;
///
/// let content = GeneratedContent::new(
///     "Yum alert! 🚨",
///     "Come hungry.",
///     vec!["#BellaVista".to_string(), "#Foodie".to_string()],
///     StyleKey::Playful,
///     vec![],
/// );
/// assert_eq!(
///     full_caption("@bellavista_nyc", &content),
///     "@bellavista_nyc Come hungry.\n\n#BellaVista #Foodie"
/// );
/// ```
pub fn full_caption(handle: &str, content: &GeneratedContent) -> String {
    format!(
        "{}\n\n{}",
        caption_line(handle, content.caption()),
        hashtag_line(content.hashtags())
    )
}

/// Plain-text download body with caption, hashtags and story caption sections.
pub fn download_text(caption: &str, hashtags: &str, story_caption: &str) -> String {
    format!("Caption:\n{caption}\n\nHashtags:\n{hashtags}\n\nStory Caption:\n{story_caption}")
}

/// Download body for generated content; a missing story caption is left empty.
pub fn content_download_text(content: &GeneratedContent) -> String {
    download_text(
        content.caption(),
        &hashtag_line(content.hashtags()),
        content.story_caption().as_deref().unwrap_or_default(),
    )
}

/// Write the download file into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns an [`ExportError`] if the directory or file cannot be written.
#[instrument(skip(content), fields(dir = %dir.as_ref().display()))]
pub fn write_download(
    dir: impl AsRef<Path>,
    content: &GeneratedContent,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        ExportError::new(ExportErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let path = dir.join(DOWNLOAD_FILE_NAME);
    std::fs::write(&path, content_download_text(content)).map_err(|e| {
        ExportError::new(ExportErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(path = %path.display(), "Wrote download");
    Ok(path)
}

/// Pretty-printed JSON for any serializable value.
///
/// # Errors
///
/// Returns a [`JsonError`] if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize content: {}", e)))
}

/// The pieces of generated content a user can copy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CopyTarget {
    /// Caption alone
    Caption,
    /// Hashtags joined by spaces
    Hashtags,
    /// Handle, caption and hashtags
    FullCaption,
    /// Story prompt, empty when there is none
    StoryCaption,
}

impl CopyTarget {
    /// Text copied for this target.
    pub fn text(&self, handle: &str, content: &GeneratedContent) -> String {
        match self {
            Self::Caption => content.caption().clone(),
            Self::Hashtags => hashtag_line(content.hashtags()),
            Self::FullCaption => full_caption(handle, content),
            Self::StoryCaption => content.story_caption().clone().unwrap_or_default(),
        }
    }
}

/// Destination for copied text.
///
/// Implementations copy the text verbatim.
pub trait Clipboard {
    /// Replace the clipboard contents.
    fn copy(&mut self, text: &str);

    /// Current clipboard contents, if any.
    fn contents(&self) -> Option<&str>;
}

/// In-process clipboard.
///
/// # Examples
///
/// ```
/// use menugram_studio::{Clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::default();
/// clipboard.copy("#BellaVista #Foodie");
/// assert_eq!(clipboard.contents(), Some("#BellaVista #Foodie"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Copy one piece of generated content and return what was copied.
pub fn copy_to<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    target: CopyTarget,
    handle: &str,
    content: &GeneratedContent,
) -> String {
    let text = target.text(handle, content);
    clipboard.copy(&text);
    text
}
