//! Rendering checks against ratatui's TestBackend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use socialpulse_config::SocialPulseConfig;
use socialpulse_core::{GeneratedPost, Platform, StyleTables};
use socialpulse_error::SocialPulseResult;
use socialpulse_tui::{App, Clipboard, PreviewCard, PreviewState, draw};
use std::sync::Arc;
use std::time::Instant;

fn screen(buffer: &Buffer) -> String {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(platform: Platform, data: Option<&GeneratedPost>, loading: bool) -> String {
    let tables = StyleTables::new();
    let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
    terminal
        .draw(|f| {
            let card = PreviewCard::new(platform, tables.platform(platform), data, loading);
            f.render_widget(card, f.area());
        })
        .unwrap();
    screen(terminal.backend().buffer())
}

fn post() -> GeneratedPost {
    GeneratedPost {
        content: "First line\nSecond line".to_string(),
        hashtags: vec!["launch".to_string(), "#startup".to_string()],
        image_suggestion: "A rocket over a city".to_string(),
        estimated_reach: "High".to_string(),
    }
}

#[test]
fn empty_card_shows_ready_placeholder() {
    let text = render_card(Platform::LinkedIn, None, false);
    assert!(text.contains("Ready to Create"));
    assert!(text.contains("Select your options and generate a preview here."));
}

#[test]
fn loading_card_hides_stale_post() {
    let post = post();
    let text = render_card(Platform::LinkedIn, Some(&post), true);
    assert!(text.contains('░'));
    assert!(!text.contains("First line"));
    assert!(!text.contains("Ready to Create"));
}

#[test]
fn populated_card_keeps_line_breaks_and_normalizes_hashtags() {
    let post = post();
    let text = render_card(Platform::Twitter, Some(&post), false);
    let lines: Vec<&str> = text.lines().collect();

    let first = lines.iter().position(|l| l.contains("First line")).unwrap();
    assert!(lines[first + 1].contains("Second line"));
    assert!(text.contains("#launch #startup"));
    assert!(text.contains("@alex_creates"));
    assert!(text.contains("AI Image Suggestion"));
    assert!(text.contains("A rocket over a city"));
    assert!(text.contains("Reply   Repost   Like   Share"));
}

#[test]
fn engagement_bar_follows_platform() {
    let post = post();
    let linkedin = render_card(Platform::LinkedIn, Some(&post), false);
    assert!(linkedin.contains("Like   Comment   Repost   Send"));
    let facebook = render_card(Platform::Facebook, Some(&post), false);
    assert!(facebook.contains("Like   Comment   Share"));
}

#[test]
fn preview_state_reflects_inputs() {
    let post = post();
    let tables = StyleTables::new();
    let card = PreviewCard::new(
        Platform::Facebook,
        tables.platform(Platform::Facebook),
        Some(&post),
        false,
    );
    assert_eq!(card.state(), PreviewState::Populated(&post));
}

#[test]
fn full_screen_shows_error_banner_and_counter() {
    let config = SocialPulseConfig::defaults().unwrap();
    let mut app = App::new(
        Arc::new(StyleTables::new()),
        &config.form,
        config.tui.copy_confirmation(),
    );
    app.set_platform(Platform::Twitter);
    app.set_topic("Launch");
    app.begin_generation();
    app.finish_generation(Err(socialpulse_error::ClipboardError::new("unused").into()));

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw(f, &app, Instant::now())).unwrap();
    let text = screen(terminal.backend().buffer());

    assert!(text.contains("Failed to generate content."));
    assert!(text.contains("6/280"));
    assert!(text.contains("Ready to Create"));
}

#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> SocialPulseResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

fn full_screen(app: &App, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw(f, app, now)).unwrap();
    screen(terminal.backend().buffer())
}

#[test]
fn reach_and_copy_notice_stay_visible_while_regenerating() {
    let config = SocialPulseConfig::defaults().unwrap();
    let mut app = App::new(
        Arc::new(StyleTables::new()),
        &config.form,
        config.tui.copy_confirmation(),
    );
    app.set_topic("Launch");
    app.begin_generation();
    app.finish_generation(Ok(post()));
    app.begin_generation();

    let now = Instant::now();
    let text = full_screen(&app, now);
    assert!(text.contains("Est. Reach: High"));
    assert!(text.contains("Ctrl+Y: Copy"));
    assert!(!text.contains("First line"));

    let mut clipboard = MemoryClipboard::default();
    app.copy_to_clipboard(&mut clipboard, now).unwrap();
    assert_eq!(clipboard.text.as_deref(), Some(post().clipboard_text().as_str()));
    assert!(full_screen(&app, now).contains("Copied!"));
}
