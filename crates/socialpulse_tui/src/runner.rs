//! TUI runner - main loop, terminal lifecycle and background generation.

use crate::app::{COPY_FAILED_STATUS, READY_STATUS};
use crate::{App, Clipboard, Event, EventHandler};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use socialpulse_core::{GeneratedPost, PostRequest};
use socialpulse_error::{
    GenerationError, GenerationErrorKind, SocialPulseResult, TuiError, TuiErrorKind, TuiResult,
};
use socialpulse_interface::PostGenerator;
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;
type PendingPost = oneshot::Receiver<SocialPulseResult<GeneratedPost>>;

/// What the loop must do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was handled (or ignored) by the form itself
    Continue,
    /// Start a generation
    Generate,
    /// Copy the current post
    Copy,
}

/// Apply a key press to the form.
///
/// Editing and navigation happen here. Generation and copying need
/// resources the form does not own, so they are returned to the caller.
pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('y') if ctrl => return KeyOutcome::Copy,
        KeyCode::Enter if alt => app.insert_newline(),
        KeyCode::Enter => return KeyOutcome::Generate,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        KeyCode::Left => app.select_previous(),
        KeyCode::Right => app.select_next(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.insert_char(c),
        _ => {}
    }
    KeyOutcome::Continue
}

/// Apply any input event to the form.
///
/// Pasted text goes into the focused field in one piece, so line breaks in
/// it never trigger a generation.
pub fn handle_event(app: &mut App, event: Event) -> KeyOutcome {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            app.insert_str(&text);
            KeyOutcome::Continue
        }
        Event::Tick | Event::Resize => KeyOutcome::Continue,
    }
}

/// Run the form until the user quits.
///
/// The terminal is restored on return and, through a panic hook, on panic.
/// `generator` runs on a spawned task so the form stays responsive while a
/// post is generated. Must be called from a multi-threaded tokio runtime.
pub async fn run_tui(
    app: &mut App,
    generator: Arc<dyn PostGenerator>,
    clipboard: &mut dyn Clipboard,
    tick_rate: Duration,
) -> SocialPulseResult<()> {
    let mut terminal = setup_terminal()?;
    install_panic_hook();
    info!(
        provider = generator.provider_name(),
        model = generator.model_name(),
        "Starting form"
    );

    let outcome = event_loop(&mut terminal, app, generator, clipboard, tick_rate).await;
    restore_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    generator: Arc<dyn PostGenerator>,
    clipboard: &mut dyn Clipboard,
    tick_rate: Duration,
) -> SocialPulseResult<()> {
    let events = EventHandler::new(tick_rate);
    let mut pending: Option<PendingPost> = None;

    while !app.should_quit {
        poll_generation(app, &mut pending);

        let now = Instant::now();
        app.tick(now);
        terminal
            .draw(|f| crate::ui::draw(f, app, now))
            .map_err(|e| TuiError::new(TuiErrorKind::Draw(e.to_string())))?;

        let Some(event) = tokio::task::block_in_place(|| events.next())? else {
            continue;
        };
        match handle_event(app, event) {
            KeyOutcome::Generate => {
                if let Some(request) = app.begin_generation() {
                    pending = Some(spawn_generation(Arc::clone(&generator), request));
                }
            }
            KeyOutcome::Copy => copy_post(app, clipboard, Instant::now()),
            KeyOutcome::Continue => {}
        }
    }

    Ok(())
}

/// Copy the current post and report the outcome in the status bar.
pub(crate) fn copy_post(app: &mut App, clipboard: &mut dyn Clipboard, now: Instant) {
    match app.copy_to_clipboard(clipboard, now) {
        Ok(()) => app.status_message = READY_STATUS.to_string(),
        Err(e) => {
            warn!(error = %e, "Clipboard write failed");
            app.status_message = COPY_FAILED_STATUS.to_string();
        }
    }
}

/// Run one generation on its own task.
pub(crate) fn spawn_generation(
    generator: Arc<dyn PostGenerator>,
    request: PostRequest,
) -> PendingPost {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = generator.generate_post(&request).await;
        if tx.send(outcome).is_err() {
            debug!("Form closed before generation finished");
        }
    });
    rx
}

/// Hand a finished generation to the form, if there is one.
pub(crate) fn poll_generation(app: &mut App, pending: &mut Option<PendingPost>) {
    let Some(rx) = pending.as_mut() else {
        return;
    };
    match rx.try_recv() {
        Ok(outcome) => app.finish_generation(outcome),
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Closed) => app.finish_generation(Err(GenerationError::new(
            GenerationErrorKind::Transport("generation task ended without a result".to_string()),
        )
        .into())),
    }
    *pending = None;
}

#[instrument]
fn setup_terminal() -> TuiResult<Tui> {
    enable_raw_mode().map_err(|e| TuiError::enter("raw mode", e))?;
    let mut stdout = io::stdout();
    let screen = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .map_err(|e| TuiError::enter("alternate screen", e))
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .map_err(|e| TuiError::enter("terminal", e))
        });
    undo_failed_setup(screen, &mut stdout)
}

/// Leave raw mode and the alternate screen when setup failed part way.
fn undo_failed_setup<T>(result: TuiResult<T>, out: &mut impl Write) -> TuiResult<T> {
    if result.is_err() {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Could not leave raw mode after failed setup");
        }
        if let Err(e) = execute!(out, DisableBracketedPaste, LeaveAlternateScreen) {
            warn!(error = %e, "Could not leave alternate screen after failed setup");
        }
    }
    result
}

#[instrument(skip_all)]
fn restore_terminal(terminal: &mut Tui) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| TuiError::leave("raw mode", e))?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)
        .map_err(|e| TuiError::leave("alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| TuiError::leave("cursor", e))
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use socialpulse_config::FormSettings;
    use socialpulse_core::{Platform, StyleTables, Tone};

    struct Echo;

    #[async_trait]
    impl PostGenerator for Echo {
        async fn generate_post(&self, request: &PostRequest) -> SocialPulseResult<GeneratedPost> {
            Ok(GeneratedPost {
                content: request.topic.clone(),
                hashtags: vec![],
                image_suggestion: String::new(),
                estimated_reach: "Moderate".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    fn app() -> App {
        let form = FormSettings {
            default_audience: "Everyone".to_string(),
            default_platform: Platform::LinkedIn,
            default_tone: Tone::Professional,
        };
        App::new(Arc::new(StyleTables::new()), &form, Duration::from_secs(2))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_edits_topic_and_enter_requests_generation() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('h'))), KeyOutcome::Continue);
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter)), KeyOutcome::Generate);
        assert_eq!(app.topic, "h");
    }

    #[test]
    fn control_keys_copy_and_quit() {
        let mut app = app();
        let copy = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, copy), KeyOutcome::Copy);
        assert!(app.topic.is_empty());

        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut app, quit);
        assert!(app.should_quit);
    }

    struct Flaky {
        fail: bool,
    }

    impl Clipboard for Flaky {
        fn set_text(&mut self, _text: &str) -> SocialPulseResult<()> {
            if self.fail {
                return Err(socialpulse_error::ClipboardError::new("no display").into());
            }
            Ok(())
        }
    }

    #[test]
    fn pasted_lines_stay_in_topic_without_generating() {
        let mut app = app();
        let outcome = handle_event(&mut app, Event::Paste("Line one\nLine two".to_string()));

        assert_eq!(outcome, KeyOutcome::Continue);
        assert_eq!(app.topic, "Line one\nLine two");
        assert!(!app.is_generating());
    }

    #[test]
    fn alt_enter_breaks_topic_line() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(handle_key(&mut app, alt_enter), KeyOutcome::Continue);
        handle_key(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.topic, "a\nb");
    }

    #[test]
    fn successful_copy_clears_earlier_failure_notice() {
        let mut app = app();
        app.set_topic("Release notes");
        app.begin_generation();
        app.finish_generation(Ok(GeneratedPost {
            content: "Out now".to_string(),
            hashtags: vec!["release".to_string()],
            image_suggestion: String::new(),
            estimated_reach: "High".to_string(),
        }));
        let now = Instant::now();

        copy_post(&mut app, &mut Flaky { fail: true }, now);
        assert_eq!(app.status_message, COPY_FAILED_STATUS);
        assert!(!app.is_copied(now));

        copy_post(&mut app, &mut Flaky { fail: false }, now);
        assert_eq!(app.status_message, READY_STATUS);
        assert!(app.is_copied(now));
    }

    #[test]
    fn failed_setup_leaves_alternate_screen() {
        let mut out = Vec::new();
        let failed: TuiResult<()> = Err(TuiError::enter("terminal", "no tty"));

        let err = undo_failed_setup(failed, &mut out).unwrap_err();

        assert!(matches!(err.kind, TuiErrorKind::EnterTerminal { step: "terminal", .. }));
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?2004l"));
    }

    #[test]
    fn successful_setup_writes_nothing_extra() {
        let mut out = Vec::new();
        assert!(undo_failed_setup(Ok(()), &mut out).is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn arrows_change_focused_selector() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::BackTab));
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.platform, Platform::Twitter);
    }

    #[tokio::test]
    async fn spawned_generation_is_delivered_to_form() {
        let mut app = app();
        app.set_topic("Release notes");
        let request = app.begin_generation().expect("topic is set");
        let mut pending = Some(spawn_generation(Arc::new(Echo), request));

        while pending.is_some() {
            poll_generation(&mut app, &mut pending);
            tokio::task::yield_now().await;
        }

        assert!(!app.is_generating());
        assert_eq!(app.result().map(|p| p.content.as_str()), Some("Release notes"));
    }

    #[test]
    fn dropped_sender_counts_as_failure() {
        let mut app = app();
        app.set_topic("Release notes");
        app.begin_generation();
        let (tx, rx) = oneshot::channel();
        drop(tx);
        let mut pending = Some(rx);

        poll_generation(&mut app, &mut pending);

        assert!(pending.is_none());
        assert!(!app.is_generating());
        assert_eq!(app.error(), Some(crate::GENERATION_FAILED_MESSAGE));
    }
}
