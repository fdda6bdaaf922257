//! Content template engine for restaurant social posts.
//!
//! Given a [`ContentRequest`](menugram_core::ContentRequest), the engine picks
//! a tagline, a caption and a hashtag set from fixed template tables and
//! resolves the requested style into presentation attributes.
//!
//! # Architecture
//!
//! - [`StyleRegistry`]: style key to [`StyleAttributes`](menugram_core::StyleAttributes)
//! - [`TaglineGenerator`]: short headline, keyed by post type and style
//! - [`CaptionGenerator`]: caption paragraph, keyed by post type and flow
//! - [`HashtagGenerator`]: ordered, de-duplicated, capped hashtags
//! - [`ContentAssembler`]: runs all of the above for one flow
//!
//! Every random choice goes through a [`Sampler`], so tests and reproducible
//! runs can pin the selection with a seed or a fixed index sequence.
//!
//! # Example
//!
//! ```
//! use menugram_core::{ContentRequest, Flow, MenuItem, PostType};
//! use menugram_templates::{ContentAssembler, RandomSampler};
//!
//! let request = ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::Menu)
//!     .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Aged parmesan")]);
//!
//! let assembler = ContentAssembler::new(Flow::Post);
//! let mut sampler = RandomSampler::seeded(7);
//! let content = assembler.assemble(&request, &mut sampler);
//!
//! assert_eq!(content.hashtags()[0], "#bellavista_nyc");
//! assert_eq!(content.hashtags()[1], "#BellaVista");
//! assert!(content.hashtags().len() <= 8);
//! ```
//!
//! The engine never fails: unknown style keys fall back to elegant and empty
//! names simply produce fewer hashtags.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod caption;
mod hashtag;
mod registry;
mod render;
mod sampler;
mod tagline;

pub use assembler::ContentAssembler;
pub use caption::{CaptionGenerator, CaptionShape};
pub use hashtag::{
    GENERIC_POOL, HashtagGenerator, HashtagProfile, MENU_POOL, USER_IMAGE_POOL, handle_tag,
    word_tag,
};
pub use registry::StyleRegistry;
pub use render::{TemplateVars, render};
pub use sampler::{RandomSampler, Sampler, SequenceSampler, choose};
pub use tagline::TaglineGenerator;
