use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{header_lines, index_span};

/// Render every setting with its value and, when constrained, the values
/// it accepts
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines = header_lines("SETTINGS", &app.theme);

    for (i, field) in app.config.fields().iter().enumerate() {
        let mut spans = vec![
            index_span(i, Style::default().fg(app.theme.green).bg(bg)),
            Span::styled(
                format!("{}: ", field.description),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(
                field.value().to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        if !field.allowed.is_empty() {
            spans.push(Span::styled(
                format!(" [{}]", field.allowed.join("/")),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
