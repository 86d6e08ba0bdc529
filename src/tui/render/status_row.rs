use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FeedbackKind};

const PROMPT: &str = "> ";

/// Render the result of the last command
pub fn render_feedback_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let fg = match app.feedback.kind {
        FeedbackKind::Info => app.theme.text,
        FeedbackKind::Error => app.theme.red,
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        app.feedback.text.clone(),
        Style::default().fg(fg).bg(bg),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the input prompt and place the terminal cursor in it. Long input
/// scrolls so the cursor stays visible.
pub fn render_prompt_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.input.as_str().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ]);

    let cursor_col = (PROMPT.len() + app.input.cursor_col()) as u16;
    let scroll = cursor_col.saturating_sub(area.width.saturating_sub(1));
    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(bg))
        .scroll((0, scroll));
    frame.render_widget(paragraph, area);
    frame.set_cursor_position((area.x + cursor_col - scroll, area.y));
}
