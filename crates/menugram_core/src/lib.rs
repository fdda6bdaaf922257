//! Core data types for the Menugram content generator.
//!
//! This crate provides the records passed into and out of the template engine:
//! the [`ContentRequest`] assembled from form input, the [`GeneratedContent`]
//! handed to preview renderers, and the closed enumerations ([`StyleKey`],
//! [`PostType`], [`Course`], [`Flow`]) that select templates and layouts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod course;
mod flow;
mod menu_item;
mod post_type;
mod request;
mod style;
mod validation;

pub use content::GeneratedContent;
pub use course::Course;
pub use flow::Flow;
pub use menu_item::{MenuItem, MenuItemBuilder};
pub use post_type::PostType;
pub use request::{ContentRequest, ContentRequestBuilder, parse_brand_colors};
pub use style::{StyleAttributes, StyleKey};
pub use validation::validate_request;
