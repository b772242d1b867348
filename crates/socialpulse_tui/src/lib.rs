//! Terminal form for generating social media posts.
//!
//! [`App`] holds the form state and its transitions and can be driven
//! without a terminal. [`run_tui`] wires it to crossterm input, a ratatui
//! frame and a background generation task. [`PreviewCard`] renders a
//! platform-styled preview of the current result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod clipboard;
mod events;
mod preview;
mod runner;
mod ui;

pub use app::{App, Field, GENERATION_FAILED_MESSAGE};
pub use clipboard::{Clipboard, SystemClipboard};
pub use events::{Event, EventHandler};
pub use preview::{PreviewCard, PreviewState};
pub use runner::{handle_event, handle_key, run_tui, KeyOutcome};
pub use ui::draw;
