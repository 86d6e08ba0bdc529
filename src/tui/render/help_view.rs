use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::header_lines;

/// Render the help text chosen by the last `help` command
pub fn render_help_view(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.text).bg(app.theme.background);
    let mut lines = header_lines("HELP", &app.theme);
    lines.extend(app.help_text.iter().map(|l| Line::styled(*l, style)));

    let paragraph = Paragraph::new(lines).style(style);
    frame.render_widget(paragraph, area);
}
