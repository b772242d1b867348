//! Form state and its transitions.

use crate::Clipboard;
use socialpulse_config::FormSettings;
use socialpulse_core::{CharLimit, GeneratedPost, Platform, PostRequest, StyleTables, Tone};
use socialpulse_error::SocialPulseResult;
use socialpulse_interface::PostGenerator;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

/// Message shown for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again later.";

pub(crate) const READY_STATUS: &str = "Enter: Generate | Ctrl+Y: Copy | Esc: Quit";
pub(crate) const COPY_FAILED_STATUS: &str = "Could not copy to clipboard";

/// Form field holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Platform selector
    Platform,
    /// Topic text area
    Topic,
    /// Tone selector
    Tone,
    /// Audience text input
    Audience,
    /// Generate button
    Generate,
}

impl Field {
    /// The field after this one in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Platform => Field::Topic,
            Field::Topic => Field::Tone,
            Field::Tone => Field::Audience,
            Field::Audience => Field::Generate,
            Field::Generate => Field::Platform,
        }
    }

    /// The field before this one in tab order, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Field::Platform => Field::Generate,
            Field::Topic => Field::Platform,
            Field::Tone => Field::Topic,
            Field::Audience => Field::Tone,
            Field::Generate => Field::Audience,
        }
    }
}

/// Main application state.
///
/// Inputs are public and may be edited at any time, including while a
/// generation is in flight; edits only affect the next request. The
/// in-flight flag, last result, last error and copy confirmation change
/// only through the transition methods.
pub struct App {
    /// What the post is about
    pub topic: String,
    /// Selected platform
    pub platform: Platform,
    /// Selected tone
    pub tone: Tone,
    /// Audience, blank for the default
    pub audience: String,
    /// Focused field
    pub focus: Field,
    /// Transient notice shown in the status bar
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
    generating: bool,
    result: Option<GeneratedPost>,
    error: Option<String>,
    copied_until: Option<Instant>,
    tables: Arc<StyleTables>,
    default_audience: String,
    copy_confirmation: Duration,
}

impl App {
    /// Create a form with the configured defaults and an empty topic.
    pub fn new(tables: Arc<StyleTables>, form: &FormSettings, copy_confirmation: Duration) -> Self {
        Self {
            topic: String::new(),
            platform: form.default_platform,
            tone: form.default_tone,
            audience: String::new(),
            focus: Field::Topic,
            status_message: READY_STATUS.to_string(),
            should_quit: false,
            generating: false,
            result: None,
            error: None,
            copied_until: None,
            tables,
            default_audience: form.default_audience.clone(),
            copy_confirmation,
        }
    }

    /// Style tables the form was built with.
    pub fn tables(&self) -> &StyleTables {
        &self.tables
    }

    /// Replace the topic.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Select a platform.
    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    /// Select a tone.
    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// Replace the audience.
    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.audience = audience.into();
    }

    /// Whether a generation call is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Last successful post, if any.
    pub fn result(&self) -> Option<&GeneratedPost> {
        self.result.as_ref()
    }

    /// User-facing message of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the generate action is enabled.
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.topic.trim().is_empty()
    }

    /// Character-limit feedback for the topic on the selected platform.
    pub fn char_limit(&self) -> CharLimit {
        self.tables.char_limit(&self.topic, self.platform)
    }

    /// Warning shown when the generated body is longer than the platform allows.
    pub fn content_warning(&self) -> Option<String> {
        let post = self.result.as_ref()?;
        let profile = self.tables.platform(self.platform);
        post.exceeds(profile).then(|| {
            format!(
                "Warning: Content exceeds {}'s character limit ({}/{}).",
                self.platform,
                post.content_length(),
                profile.max_length
            )
        })
    }

    /// Request that would be sent right now.
    pub fn request(&self) -> PostRequest {
        let audience = if self.audience.trim().is_empty() {
            self.default_audience.clone()
        } else {
            self.audience.clone()
        };
        PostRequest {
            topic: self.topic.clone(),
            platform: self.platform,
            tone: self.tone,
            audience,
        }
    }

    /// Enter the generating state.
    ///
    /// Returns the request to send, or `None` (and changes nothing) when the
    /// topic is blank or a generation is already in flight. The previous
    /// result is kept until a new one arrives.
    #[instrument(skip(self), fields(platform = %self.platform, tone = %self.tone))]
    pub fn begin_generation(&mut self) -> Option<PostRequest> {
        if !self.can_generate() {
            debug!(generating = self.generating, "Generate ignored");
            return None;
        }
        self.generating = true;
        self.error = None;
        self.copied_until = None;
        info!("Generation started");
        Some(self.request())
    }

    /// Leave the generating state with the call's outcome.
    ///
    /// A post replaces the previous result entirely. Any error is logged and
    /// reduced to [`GENERATION_FAILED_MESSAGE`]; the previous result is left
    /// as it was.
    pub fn finish_generation(&mut self, outcome: SocialPulseResult<GeneratedPost>) {
        self.generating = false;
        match outcome {
            Ok(post) => {
                info!(hashtags = post.hashtags.len(), "Generation succeeded");
                self.result = Some(post);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "Generation failed");
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Run one generation to completion.
    ///
    /// Returns `false` without calling `generator` when generation is not
    /// enabled.
    pub async fn generate(&mut self, generator: &dyn PostGenerator) -> bool {
        let Some(request) = self.begin_generation() else {
            return false;
        };
        let outcome = generator.generate_post(&request).await;
        self.finish_generation(outcome);
        true
    }

    /// Copy the current post to the clipboard and show the confirmation.
    ///
    /// Does nothing when there is no result.
    #[instrument(skip_all)]
    pub fn copy_to_clipboard(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> SocialPulseResult<()> {
        let Some(post) = &self.result else {
            return Ok(());
        };
        clipboard.set_text(&post.clipboard_text())?;
        self.copied_until = Some(now + self.copy_confirmation);
        debug!("Post copied to clipboard");
        Ok(())
    }

    /// Whether the copy confirmation is visible at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Expire the copy confirmation once its window has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// Move focus forward.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus backward.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused text field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::Topic => self.topic.push(c),
            Field::Audience => self.audience.push(c),
            _ => {}
        }
    }

    /// Insert pasted text into the focused text field.
    ///
    /// Line endings are normalized to `\n` and kept in the topic. The
    /// single-line audience gets spaces in their place.
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.focus {
            Field::Topic => self.topic.push_str(&text),
            Field::Audience => self.audience.push_str(&text.replace('\n', " ")),
            _ => {}
        }
    }

    /// Start a new line in the topic when it has focus.
    pub fn insert_newline(&mut self) {
        if self.focus == Field::Topic {
            self.topic.push('\n');
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            Field::Topic => {
                self.topic.pop();
            }
            Field::Audience => {
                self.audience.pop();
            }
            _ => {}
        }
    }

    /// Advance the focused selector.
    pub fn select_next(&mut self) {
        match self.focus {
            Field::Platform => self.platform = self.platform.next(),
            Field::Tone => self.tone = self.tone.next(),
            _ => {}
        }
    }

    /// Step the focused selector back.
    pub fn select_previous(&mut self) {
        match self.focus {
            Field::Platform => self.platform = self.platform.previous(),
            Field::Tone => self.tone = self.tone.previous(),
            _ => {}
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialpulse_error::{GenerationError, GenerationErrorKind};

    fn form() -> FormSettings {
        FormSettings {
            default_audience: "General Professional Audience".to_string(),
            default_platform: Platform::LinkedIn,
            default_tone: Tone::Professional,
        }
    }

    fn app() -> App {
        App::new(
            Arc::new(StyleTables::new()),
            &form(),
            Duration::from_millis(2000),
        )
    }

    fn post(content: &str) -> GeneratedPost {
        GeneratedPost {
            content: content.to_string(),
            hashtags: vec!["one".to_string()],
            image_suggestion: "image".to_string(),
            estimated_reach: "High".to_string(),
        }
    }

    #[test]
    fn blank_topic_cannot_generate() {
        let mut app = app();
        app.set_topic("   \n\t");
        assert!(!app.can_generate());
        assert_eq!(app.begin_generation(), None);
        assert!(!app.is_generating());
    }

    #[test]
    fn begin_clears_error_and_sets_flag() {
        let mut app = app();
        app.set_topic("Hiring");
        app.begin_generation();
        app.finish_generation(Err(
            GenerationError::new(GenerationErrorKind::EmptyResponse).into()
        ));
        assert!(app.error().is_some());

        let request = app.begin_generation();
        assert!(request.is_some());
        assert!(app.is_generating());
        assert_eq!(app.error(), None);
    }

    #[test]
    fn second_begin_while_generating_is_ignored() {
        let mut app = app();
        app.set_topic("Hiring");
        assert!(app.begin_generation().is_some());
        assert!(app.begin_generation().is_none());
        assert!(app.is_generating());
    }

    #[test]
    fn blank_audience_uses_default_label() {
        let mut app = app();
        app.set_topic("Hiring");
        app.set_audience("  ");
        assert_eq!(
            app.request().audience,
            "General Professional Audience"
        );
        app.set_audience("Recruiters");
        assert_eq!(app.request().audience, "Recruiters");
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut app = app();
        app.set_topic("Hiring");
        app.begin_generation();
        app.finish_generation(Ok(post("first")));

        app.begin_generation();
        app.finish_generation(Err(GenerationError::new(
            GenerationErrorKind::Transport("connection reset".into()),
        )
        .into()));

        assert_eq!(app.result().map(|p| p.content.as_str()), Some("first"));
        assert_eq!(app.error(), Some(GENERATION_FAILED_MESSAGE));
        assert!(!app.is_generating());
    }

    #[test]
    fn content_warning_only_when_over_platform_limit() {
        let mut app = app();
        app.set_platform(Platform::Twitter);
        app.set_topic("Hiring");
        app.begin_generation();
        app.finish_generation(Ok(post(&"x".repeat(281))));
        assert_eq!(
            app.content_warning().as_deref(),
            Some("Warning: Content exceeds Twitter's character limit (281/280).")
        );

        app.set_platform(Platform::LinkedIn);
        assert_eq!(app.content_warning(), None);
    }

    #[test]
    fn keyboard_edits_go_to_focused_field() {
        let mut app = app();
        app.focus = Field::Topic;
        app.insert_char('h');
        app.insert_char('i');
        app.focus_next();
        app.insert_char('x');
        app.focus_next();
        app.insert_char('a');
        app.backspace();
        app.insert_char('b');

        assert_eq!(app.topic, "hi");
        assert_eq!(app.focus, Field::Audience);
        assert_eq!(app.audience, "b");
    }

    #[test]
    fn paste_keeps_topic_lines_and_flattens_audience() {
        let mut app = app();
        app.focus = Field::Topic;
        app.insert_str("Line one\r\nLine two\rLine three");
        assert_eq!(app.topic, "Line one\nLine two\nLine three");

        app.focus = Field::Audience;
        app.insert_str("Founders\nand investors");
        assert_eq!(app.audience, "Founders and investors");

        app.focus = Field::Tone;
        app.insert_str("ignored");
        app.insert_newline();
        assert_eq!(app.topic, "Line one\nLine two\nLine three");
    }

    #[test]
    fn selectors_cycle_only_when_focused() {
        let mut app = app();
        app.focus = Field::Platform;
        app.select_next();
        assert_eq!(app.platform, Platform::Twitter);
        app.focus = Field::Tone;
        app.select_previous();
        assert_eq!(app.tone, Tone::Witty);
        app.focus = Field::Topic;
        app.select_next();
        assert_eq!(app.platform, Platform::Twitter);
        assert_eq!(app.tone, Tone::Witty);
    }

    #[test]
    fn focus_order_wraps() {
        let mut field = Field::Platform;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, Field::Platform);
        assert_eq!(Field::Platform.previous(), Field::Generate);
    }
}
