//! Platform-styled preview of a generated post.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use socialpulse_core::{GeneratedPost, Platform, PlatformProfile};

const DISPLAY_NAME: &str = "Alex Designer";

/// Which of the three mutually exclusive previews to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState<'a> {
    /// Nothing generated yet
    Empty,
    /// A generation is in flight
    Loading,
    /// A post is available
    Populated(&'a GeneratedPost),
}

impl<'a> PreviewState<'a> {
    /// Pick the state for the given data and loading flag.
    ///
    /// Loading wins over data, so a stale post is never shown while a new
    /// one is being generated.
    ///
    /// ```
    /// use socialpulse_tui::PreviewState;
    ///
    /// assert_eq!(PreviewState::of(None, false), PreviewState::Empty);
    /// assert_eq!(PreviewState::of(None, true), PreviewState::Loading);
    /// ```
    pub fn of(data: Option<&'a GeneratedPost>, loading: bool) -> Self {
        match (data, loading) {
            (_, true) => PreviewState::Loading,
            (Some(post), false) => PreviewState::Populated(post),
            (None, false) => PreviewState::Empty,
        }
    }
}

/// Preview card widget.
pub struct PreviewCard<'a> {
    platform: Platform,
    profile: &'a PlatformProfile,
    state: PreviewState<'a>,
}

impl<'a> PreviewCard<'a> {
    /// Build a card for `platform` from the current data and loading flag.
    pub fn new(
        platform: Platform,
        profile: &'a PlatformProfile,
        data: Option<&'a GeneratedPost>,
        loading: bool,
    ) -> Self {
        Self {
            platform,
            profile,
            state: PreviewState::of(data, loading),
        }
    }

    /// State this card will draw.
    pub fn state(&self) -> PreviewState<'a> {
        self.state
    }

    fn accent(&self) -> Color {
        match self.platform {
            Platform::LinkedIn => Color::Blue,
            Platform::Twitter => Color::Cyan,
            Platform::Facebook => Color::LightBlue,
        }
    }

    fn header(&self) -> Vec<Line<'static>> {
        let mut name = vec![Span::styled(
            DISPLAY_NAME,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        match (self.platform, self.profile.handle) {
            (Platform::LinkedIn, _) => {
                name.push(Span::styled(" • 1st", Style::default().fg(Color::Gray)));
            }
            (_, Some(handle)) => {
                name.push(Span::styled(format!(" {handle}"), Style::default().fg(Color::Gray)));
            }
            _ => {}
        }
        vec![
            Line::from(name),
            Line::styled(self.profile.header_line, Style::default().fg(Color::Gray)),
        ]
    }

    fn render_empty(area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
            .split(inner);
        Paragraph::new(vec![
            Line::styled("Ready to Create", Style::default().add_modifier(Modifier::BOLD)),
            Line::from("Select your options and generate a preview here."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rows[1], buf);
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.platform));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let bar = |fraction_num: usize, fraction_den: usize| {
            Line::styled(
                "░".repeat(width * fraction_num / fraction_den),
                Style::default().fg(Color::DarkGray),
            )
        };
        let mut lines = vec![
            bar(1, 4),
            bar(1, 6),
            Line::default(),
            bar(3, 4),
            bar(1, 1),
            bar(5, 6),
            Line::default(),
        ];
        lines.extend(std::iter::repeat_with(|| bar(1, 1)).take(4));
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_post(&self, post: &GeneratedPost, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", self.platform));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Body and hashtags
                Constraint::Length(4), // Image suggestion
                Constraint::Length(1), // Engagement bar
            ])
            .split(inner);

        Paragraph::new(self.header()).render(rows[0], buf);

        let mut body: Vec<Line> = post.content.split('\n').map(Line::from).collect();
        let hashtags = post.hashtag_line();
        if !hashtags.is_empty() {
            body.push(Line::default());
            body.push(Line::styled(
                hashtags,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Text::from(body))
            .wrap(Wrap { trim: false })
            .render(rows[1], buf);

        Paragraph::new(Line::styled(
            format!("\"{}\"", post.image_suggestion),
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("AI Image Suggestion"),
        )
        .render(rows[2], buf);

        Paragraph::new(self.profile.engagement_actions.join("   "))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .render(rows[3], buf);
    }
}

impl Widget for PreviewCard<'_> {
    #[tracing::instrument(skip_all, fields(platform = %self.platform))]
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            PreviewState::Empty => Self::render_empty(area, buf),
            PreviewState::Loading => self.render_loading(area, buf),
            PreviewState::Populated(post) => self.render_post(post, area, buf),
        }
    }
}
