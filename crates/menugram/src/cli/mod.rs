//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the menugram binary.

mod commands;
mod handlers;
mod studio;

pub use commands::{Cli, Commands};
pub use handlers::{list_styles, run_menu, run_post, run_scan, run_story};
pub use studio::Studio;
