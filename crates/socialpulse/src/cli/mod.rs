//! Command-line interface module.
//!
//! This module provides the CLI structure and startup handlers for the socialpulse binary.

mod commands;
mod form_handler;

pub use commands::Cli;
pub use form_handler::{launch_form, load_config};
