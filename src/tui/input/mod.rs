mod line_edit;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, ViewState};

pub use line_edit::LineEditor;

/// Handle a key event. Editing keys change the prompt buffer; Enter hands
/// the finished line to the session. On the help screen the submitted line
/// only dismisses help, so nothing typed there ever runs.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        if app.state == ViewState::Help {
            app.undo_state();
        }
        app.input.clear();
        app.submit("exit");
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            let line = app.input.take();
            app.submit(&line);
        }
        (_, KeyCode::Esc) => app.input.clear(),
        (_, KeyCode::Backspace) => app.input.backspace(),
        (_, KeyCode::Delete) => app.input.delete(),
        (_, KeyCode::Left) => app.input.move_left(),
        (_, KeyCode::Right) => app.input.move_right(),
        (_, KeyCode::Home) => app.input.move_home(),
        (_, KeyCode::End) => app.input.move_end(),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => app.input.insert_char(c),
        _ => {}
    }
}

/// Handle a bracketed paste: the text lands in the prompt, nothing is submitted
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    app.input.insert_str(text);
}
