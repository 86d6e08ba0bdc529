pub mod help_view;
pub mod helpers;
pub mod list_view;
pub mod settings_view;
pub mod sidebar;
pub mod status_row;
pub mod task_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, ViewState};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | feedback (1 row) | prompt (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // The help screen gets the full width; other views share it with the
    // command panel
    let content = if app.state == ViewState::Help {
        rows[0]
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(app.side_pane_width.saturating_add(1)),
            ])
            .split(rows[0]);
        sidebar::render_sidebar(frame, app, cols[1]);
        cols[0]
    };

    match app.state {
        ViewState::Help => help_view::render_help_view(frame, app, content),
        ViewState::TaskView => task_view::render_task_view(frame, app, content),
        ViewState::Settings => settings_view::render_settings_view(frame, app, content),
        ViewState::ListView | ViewState::None | ViewState::Shutdown => {
            list_view::render_list_view(frame, app, content)
        }
    }

    status_row::render_feedback_row(frame, app, rows[1]);
    status_row::render_prompt_row(frame, app, rows[2]);
}
