use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::commands::Cli;
use crate::io::config_io::{self, Settings, SettingsFile};
use crate::io::storage::{self, FileStorage};
use crate::logging;
use crate::model::{Config, List, Notebook};
use crate::parse::parse;

use super::command::{Command, CommandError};
use super::command_actions::{GENERAL_HELP, Registries, build_registries};
use super::input::{self, LineEditor};
use super::registry::CommandRegistry;
use super::render;
use super::theme::Theme;

pub const WELCOME: &str = "Welcome to Lists.";
pub const EMPTY_INPUT_HINT: &str = "Type \"help\" for assistance.";

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Before startup, and the remembered state after an undo
    None,
    Help,
    ListView,
    TaskView,
    Settings,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Error,
}

/// One-line result of the last submitted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

/// The interactive session: data, view state and everything the renderer
/// needs. Commands receive it by `&mut` reference.
pub struct App {
    pub notebook: Notebook,
    pub config: Config,
    pub state: ViewState,
    /// One level of history: the state `undo_state` returns to
    pub previous_state: ViewState,
    /// 0-based position of the list open in the task view
    pub active_list: Option<usize>,
    pub registries: Registries,
    pub feedback: Feedback,
    /// Lines shown on the help screen
    pub help_text: &'static [&'static str],
    pub input: LineEditor,
    pub theme: Theme,
    /// Width of the command side panel, in cells
    pub side_pane_width: u16,
    /// Where `set` commands are written back, if anywhere
    pub settings_file: Option<SettingsFile>,
}

impl App {
    pub fn new(notebook: Notebook, config: Config) -> Self {
        let mut app = App {
            notebook,
            config,
            state: ViewState::None,
            previous_state: ViewState::None,
            active_list: None,
            registries: build_registries(),
            feedback: Feedback {
                text: WELCOME.to_string(),
                kind: FeedbackKind::Info,
            },
            help_text: GENERAL_HELP,
            input: LineEditor::default(),
            theme: Theme::default(),
            side_pane_width: Settings::default().ui.side_pane_width,
            settings_file: None,
        };
        app.change_state(ViewState::ListView);
        app
    }

    pub fn with_ui(mut self, theme: Theme, side_pane_width: u16) -> Self {
        self.theme = theme;
        self.side_pane_width = side_pane_width;
        self
    }

    pub fn with_settings_file(mut self, file: SettingsFile) -> Self {
        self.settings_file = Some(file);
        self
    }

    /// Move to `new`, remembering the current state for `undo_state`
    pub fn change_state(&mut self, new: ViewState) {
        log::debug!("state {:?} -> {:?}", self.state, new);
        self.previous_state = self.state;
        self.state = new;
    }

    /// Return to the remembered state and forget it. With nothing
    /// remembered, fall back to the list view.
    pub fn undo_state(&mut self) {
        let restored = std::mem::replace(&mut self.previous_state, ViewState::None);
        let restored = match restored {
            ViewState::None => ViewState::ListView,
            s => s,
        };
        log::debug!("state {:?} -> {:?} (undo)", self.state, restored);
        self.state = restored;
        self.set_info(WELCOME);
    }

    pub fn is_running(&self) -> bool {
        self.state != ViewState::Shutdown
    }

    /// Commands valid in the current view. The help screen shows the
    /// commands of the view it was opened from.
    pub fn active_registry(&self) -> &CommandRegistry {
        let state = match self.state {
            ViewState::Help => self.previous_state,
            s => s,
        };
        match state {
            ViewState::TaskView => &self.registries.task_view,
            ViewState::Settings => &self.registries.settings,
            _ => &self.registries.list_view,
        }
    }

    pub fn find_command(&self, keyword: &str) -> Result<Rc<Command>, CommandError> {
        self.active_registry().find(keyword).map(Rc::clone)
    }

    pub fn active_list(&self) -> Option<&List> {
        self.notebook.get(self.active_list?)
    }

    pub fn active_list_mut(&mut self) -> Result<&mut List, CommandError> {
        let pos = self.active_list.ok_or(CommandError::NoActiveList)?;
        self.notebook
            .get_mut(pos)
            .ok_or(CommandError::NoActiveList)
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.feedback = Feedback {
            text: text.into(),
            kind: FeedbackKind::Info,
        };
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.feedback = Feedback {
            text: text.into(),
            kind: FeedbackKind::Error,
        };
    }

    /// Write a changed setting to the settings file. Failure is logged; the
    /// in-memory value stays changed.
    pub fn persist_setting(&mut self, name: &'static str, value: &str) {
        if let Some(file) = self.settings_file.as_mut()
            && let Err(e) = file.persist(name, value)
        {
            log::warn!("could not save setting {}: {}", name, e);
        }
    }

    /// Handle one submitted line of input
    pub fn submit(&mut self, raw: &str) {
        if self.state == ViewState::Help {
            self.undo_state();
            return;
        }
        if raw.trim().is_empty() {
            self.set_info(EMPTY_INPUT_HINT);
            return;
        }

        let input = parse(raw);
        log::debug!("dispatch keyword={:?} in {:?}", input.keyword, self.state);
        let result = self
            .find_command(&input.keyword)
            .and_then(|command| command.validate_and_run(self, &input));
        if let Err(e) = result {
            log::debug!("command {:?} failed: {:?}", input.keyword, e.kind());
            self.set_error(e.to_string());
        }
    }
}

/// Resolve files, load the notebook and run the terminal session until
/// `exit`. The notebook is saved on the way out.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_file) = match cli.config.clone().or_else(config_io::default_settings_path) {
        Some(path) => {
            let (settings, file) = config_io::read_settings(&path)?;
            (settings, Some(file))
        }
        None => (Settings::default(), None),
    };

    let data_path: PathBuf = cli
        .data_file
        .clone()
        .or_else(|| settings.storage.path.clone())
        .or_else(storage::default_data_path)
        .ok_or("cannot locate a data directory; pass --data-file")?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(logging::default_log_level());
    let _logger = match logging::init_logging(level, &logging::log_dir_for(&data_path)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let mut config = Config::default();
    for rejected in config_io::apply_settings(&mut config, &settings) {
        log::warn!("ignoring stored setting: {}", rejected);
    }

    let store = FileStorage::new(&data_path);
    let notebook = storage::load_notebook(&store)?;
    log::info!(
        "loaded {} lists from {}",
        notebook.len(),
        data_path.display()
    );

    let mut app = App::new(notebook, config)
        .with_ui(Theme::from_colors(&settings.ui.colors), settings.ui.side_pane_width);
    if let Some(file) = settings_file {
        app = app.with_settings_file(file);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;

    storage::save_notebook(&store, &app.notebook)?;
    log::info!(
        "saved {} lists to {}",
        app.notebook.len(),
        data_path.display()
    );
    println!("{}", app.feedback.text);
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    while app.is_running() {
        terminal.draw(|frame| render::render(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
            Event::Paste(text) => input::handle_paste(app, &text),
            // Resize and focus events just redraw
            _ => {}
        }
    }
    log::info!("session ended");
    Ok(())
}
