//! Menugram - restaurant social-media content generator
//!
//! Menugram turns a restaurant name, handle and a few menu items into an
//! Instagram-ready tagline, caption and hashtag set, styled with one of four
//! visual themes. Generation is local template selection; there is no
//! network call.
//!
//! # Quick Start
//!
//! ```
//! use menugram::{ContentAssembler, ContentRequest, Flow, MenuItem, PostType, RandomSampler};
//!
//! let request = ContentRequest::new("Svang", "", PostType::Single)
//!     .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Aged parmesan")])
//!     .with_style("playful");
//!
//! let content = ContentAssembler::new(Flow::Item).assemble(&request, &mut RandomSampler::seeded(3));
//! assert!(content.hashtags().len() <= 6);
//! ```
//!
//! # Architecture
//!
//! - `menugram_error` - Error types
//! - `menugram_core` - Requests, generated content, styles, validation
//! - `menugram_templates` - The template engine
//! - `menugram_studio` - Configuration, generation sessions, QR catalog,
//!   menu builder, previews and export
//!
//! This crate re-exports everything for convenience and ships the `menugram`
//! binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use menugram_core::*;
pub use menugram_error::*;
pub use menugram_studio::*;
pub use menugram_templates::*;
