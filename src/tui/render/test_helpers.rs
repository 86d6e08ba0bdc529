use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, List, Notebook, Task};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// "Groceries" with Milk, Eggs (done) and Bread, plus an empty "Chores"
pub fn sample_notebook() -> Notebook {
    let mut groceries = List::new("Groceries");
    groceries.push(Task::new("Milk"));
    groceries.push(Task {
        body: "Eggs".into(),
        done: true,
        prio: false,
    });
    groceries.push(Task::new("Bread"));

    let mut nb = Notebook::new();
    nb.push(groceries).unwrap();
    nb.push(List::new("Chores")).unwrap();
    nb
}

/// A session on the list view of `sample_notebook`
pub fn sample_app() -> App {
    App::new(sample_notebook(), Config::default())
}
