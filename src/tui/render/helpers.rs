use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;

/// `=== TITLE ===` header followed by a blank line
pub(super) fn header_lines(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default()
        .fg(theme.highlight)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(format!("=== {} ===", title), style)),
        Line::from(""),
    ]
}

/// The `#n ` prefix of a numbered row, `pos` being 0-based
pub(super) fn index_span(pos: usize, style: Style) -> Span<'static> {
    Span::styled(format!("#{} ", pos + 1), style)
}
