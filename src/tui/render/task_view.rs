use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::DoneTaskDisplay;
use crate::tui::app::App;

use super::helpers::{header_lines, index_span};

/// Render the tasks of the open list.
///
/// Done tasks follow the "Show done tasks" setting: greyed out, replaced by
/// the marker text, or left out. Numbering never skips, so indices typed by
/// the user always match the stored position.
pub fn render_task_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines = header_lines("TASKS", &app.theme);

    if let Some(list) = app.active_list() {
        lines.push(Line::from(Span::styled(
            list.name.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )));
        lines.push(Line::from(""));

        let display = app.config.done_task_display();
        for (i, task) in list.tasks.iter().enumerate() {
            let (body, style) = if task.done {
                let style = Style::default().fg(app.theme.dim).bg(bg);
                match display {
                    DoneTaskDisplay::No => continue,
                    DoneTaskDisplay::Hidden => (app.config.done_marker().to_string(), style),
                    DoneTaskDisplay::Yes => (task.body.clone(), style),
                }
            } else if task.is_emphasized() {
                let style = Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD);
                (task.body.clone(), style)
            } else {
                (task.body.clone(), Style::default().fg(app.theme.text).bg(bg))
            };
            lines.push(Line::from(vec![index_span(i, style), Span::styled(body, style)]));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
