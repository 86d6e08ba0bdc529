use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Render the panel listing every invocation the current view accepts
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let item_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![Line::from(Span::styled(
        unicode::truncate_to_width(" === COMMANDS ===", width),
        header_style,
    ))];
    for invocation in app.active_registry().invocations() {
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(&format!("| {}", invocation), width),
            item_style,
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
