//! Event handling for the terminal form.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use socialpulse_error::{TuiError, TuiErrorKind, TuiResult};
use std::time::Duration;

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input arrived within the tick rate
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Text pasted in one piece, line breaks included
    Paste(String),
    /// Terminal resized; the next draw picks up the new size
    Resize,
}

/// Event handler that polls for terminal events.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a handler that waits at most `tick_rate` per poll.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next event, returning [`Event::Tick`] on timeout.
    ///
    /// Key releases and repeats on terminals that report them are dropped,
    /// so each key press is seen once. Pastes arrive whole only while
    /// bracketed paste is enabled on the terminal.
    pub fn next(&self) -> TuiResult<Option<Event>> {
        let input = |e: std::io::Error| TuiError::new(TuiErrorKind::Input(e.to_string()));
        if !event::poll(self.tick_rate).map_err(input)? {
            return Ok(Some(Event::Tick));
        }
        match event::read().map_err(input)? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(Event::Key(key)))
            }
            CrosstermEvent::Paste(text) => Ok(Some(Event::Paste(text))),
            CrosstermEvent::Resize(_, _) => Ok(Some(Event::Resize)),
            _ => Ok(None),
        }
    }
}
