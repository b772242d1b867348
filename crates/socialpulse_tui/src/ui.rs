//! UI rendering for the form.

use crate::app::{App, Field};
use crate::PreviewCard;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::Instant;

/// Draw the main UI.
///
/// `now` decides whether the copy confirmation is still visible.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form and preview
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_form(f, app, columns[0]);
    draw_preview(f, app, now, columns[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SocialPulse - AI Social Media Post Generator")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn field_block(app: &App, field: Field, title: &str) -> Block<'static> {
    let border = if app.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}

fn selector_line(label: String) -> Line<'static> {
    Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ])
}

#[tracing::instrument(skip_all)]
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let error_height = if app.error().is_some() { 3 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Platform
            Constraint::Min(5),               // Topic
            Constraint::Length(3),            // Tone
            Constraint::Length(3),            // Audience
            Constraint::Length(3),            // Generate
            Constraint::Length(error_height), // Error banner
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(selector_line(app.platform.to_string()))
            .block(field_block(app, Field::Platform, "Platform")),
        rows[0],
    );

    let limit = app.char_limit();
    let counter_style = if limit.is_over_limit() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if limit.is_near_limit() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let counter = Line::styled(
        format!(" {}/{} · {} ", limit.length, limit.max_length, limit.summary()),
        counter_style,
    )
    .right_aligned();
    let topic = if app.topic.is_empty() {
        Paragraph::new(app.tables().platform(app.platform).placeholder)
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.topic.as_str())
    };
    f.render_widget(
        topic
            .wrap(Wrap { trim: false })
            .block(field_block(app, Field::Topic, "Topic").title_bottom(counter)),
        rows[1],
    );

    f.render_widget(
        Paragraph::new(selector_line(app.tone.to_string()))
            .block(field_block(app, Field::Tone, "Tone")),
        rows[2],
    );

    let audience = if app.audience.is_empty() {
        Paragraph::new("e.g. Startup founders (optional)")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.audience.as_str())
    };
    f.render_widget(
        audience.block(field_block(app, Field::Audience, "Target Audience")),
        rows[3],
    );

    let (label, style) = if app.is_generating() {
        ("Generating...", Style::default().fg(Color::DarkGray))
    } else if app.can_generate() {
        (
            "Generate Post",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Generate Post", Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(field_block(app, Field::Generate, "")),
        rows[4],
    );

    if let Some(error) = app.error() {
        f.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                ),
            rows[5],
        );
    }
}

#[tracing::instrument(skip_all)]
fn draw_preview(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let warning = app.content_warning();
    let warning_height = if warning.is_some() { 2 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Reach and copy state
            Constraint::Length(warning_height), // Limit warning
            Constraint::Min(0),                 // Card
        ])
        .split(area);

    let mut info = Vec::new();
    if let Some(post) = app.result() {
        info.push(Span::styled(
            format!("Est. Reach: {}", post.estimated_reach),
            Style::default().fg(Color::Green),
        ));
        info.push(Span::raw("   "));
        if app.is_copied(now) {
            info.push(Span::styled(
                "Copied!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        } else {
            info.push(Span::styled("Ctrl+Y: Copy", Style::default().fg(Color::Gray)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(info)), rows[0]);

    if let Some(warning) = warning {
        f.render_widget(
            Paragraph::new(warning)
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true }),
            rows[1],
        );
    }

    let card = PreviewCard::new(
        app.platform,
        app.tables().platform(app.platform),
        app.result(),
        app.is_generating(),
    );
    f.render_widget(card, rows[2]);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Field::Platform | Field::Tone => "←→: Change | Tab: Next field",
        Field::Topic => "Type or paste to edit | Alt+Enter: New line | Tab: Next field",
        Field::Audience => "Type or paste to edit | Tab: Next field",
        Field::Generate => "Enter: Generate | Tab: Next field",
    };
    let status = Paragraph::new(format!("{} | {}", app.status_message, help_text))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
