use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{header_lines, index_span};

/// Render the overview of all lists
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines = header_lines("LISTS", &app.theme);

    if app.notebook.is_empty() {
        lines.push(Line::from(Span::styled(
            "No lists yet. Type \"add ...\" to create one.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let show_progress = app.config.show_progress();
    for (i, list) in app.notebook.lists.iter().enumerate() {
        let mut spans = vec![
            index_span(i, Style::default().fg(app.theme.green).bg(bg)),
            Span::styled(
                list.name.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        if show_progress {
            spans.push(Span::styled(
                format!(" ({}/{})", list.count_done(), list.len()),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
