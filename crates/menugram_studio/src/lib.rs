//! The studio around the Menugram template engine.
//!
//! Everything the operator and customer screens did besides picking
//! templates:
//!
//! - [`StudioConfig`]: layered TOML configuration
//! - [`GenerationSession`]: delayed, cancellable generation on tokio
//! - [`MenuCatalog`]: QR-code item lookup
//! - [`MenuDraft`]: five-course menu builder
//! - [`PostPreview`] / [`StoryPreview`]: text mockups
//! - [`full_caption`], [`write_download`] and friends: clipboard and download text

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod export;
mod menu_draft;
mod preview;
mod session;

pub use catalog::{CatalogItem, CatalogItemBuilder, DEFAULT_ITEM_ID, MenuCatalog};
pub use config::{DefaultsConfig, GenerationConfig, HashtagConfig, PreviewConfig, StudioConfig};
pub use export::{
    Clipboard, CopyTarget, DOWNLOAD_FILE_NAME, MemoryClipboard, caption_line, content_download_text,
    copy_to, download_text, full_caption, hashtag_line, to_json, write_download,
};
pub use menu_draft::{COURSE_TARGET, DraftEntry, MenuDraft, SUGGESTED_MINIMUM};
pub use preview::{
    AccountHeader, FALLBACK_INITIAL, FALLBACK_LOCATION, FALLBACK_NAME, FeaturedItem, PostPreview,
    StoryPreview, truncate_description,
};
pub use session::{GenerationSession, SessionState};
