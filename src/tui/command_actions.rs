use std::rc::Rc;

use crate::ops::{config_ops, list_ops, task_ops};

use super::app::{App, ViewState};
use super::command::{Arguments, Command, CommandError};
use super::registry::CommandRegistry;

/// What a command does when it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Exit,
    Back,
    Help,
    Settings,
    ListEnter,
    ListAdd,
    ListRemove,
    ListRename,
    TaskAdd,
    TaskRemove,
    TaskRename,
    TaskDone,
    TaskPrio,
    SettingsSet,
}

impl CommandKind {
    /// Run the action against the session. Every action checks its inputs
    /// before touching the notebook, config or view state, so an error leaves
    /// the session as it was.
    pub fn execute(self, app: &mut App, args: &Arguments) -> Result<(), CommandError> {
        match self {
            CommandKind::Exit => {
                app.set_info("Goodbye!");
                app.change_state(ViewState::Shutdown);
            }
            CommandKind::Back => app.undo_state(),
            CommandKind::Help => show_help(app, &args.text)?,
            CommandKind::Settings => {
                app.set_info("Settings displayed.");
                app.change_state(ViewState::Settings);
            }

            // --- List view ---
            CommandKind::ListEnter => {
                let pos = list_ops::list_position(&app.notebook, args.required_index()?)?;
                let name = app.notebook.lists[pos].name.clone();
                app.active_list = Some(pos);
                app.set_info(format!("Viewing list \"{}\".", name));
                app.change_state(ViewState::TaskView);
            }
            CommandKind::ListAdd => {
                list_ops::add_list(&mut app.notebook, &args.text)?;
                app.set_info(format!("List \"{}\" added.", args.text));
            }
            CommandKind::ListRemove => {
                let removed = list_ops::remove_list(&mut app.notebook, args.required_index()?)?;
                app.set_info(format!("List \"{}\" removed.", removed.name));
            }
            CommandKind::ListRename => {
                let old =
                    list_ops::rename_list(&mut app.notebook, args.required_index()?, &args.text)?;
                app.set_info(format!("List \"{}\" renamed to \"{}\".", old, args.text));
            }

            // --- Task view ---
            CommandKind::TaskAdd => {
                task_ops::add_task(app.active_list_mut()?, &args.text);
                app.set_info(format!("Task \"{}\" added.", args.text));
            }
            CommandKind::TaskRemove => {
                let index = args.required_index()?;
                let removed = task_ops::remove_task(app.active_list_mut()?, index)?;
                app.set_info(format!("Task \"{}\" removed.", removed.body));
            }
            CommandKind::TaskRename => {
                let index = args.required_index()?;
                let old = task_ops::rename_task(app.active_list_mut()?, index, &args.text)?;
                app.set_info(format!("Task \"{}\" renamed to \"{}\".", old, args.text));
            }
            CommandKind::TaskDone => {
                let index = args.required_index()?;
                let task = task_ops::toggle_done(app.active_list_mut()?, index)?;
                let msg = format!(
                    "Task \"{}\" marked as {}done.",
                    task.body,
                    if task.done { "" } else { "not " }
                );
                app.set_info(msg);
            }
            CommandKind::TaskPrio => {
                let index = args.required_index()?;
                let task = task_ops::toggle_prio(app.active_list_mut()?, index)?;
                let msg = format!(
                    "Task \"{}\" marked as {}priority.",
                    task.body,
                    if task.prio { "" } else { "not " }
                );
                app.set_info(msg);
            }

            // --- Settings ---
            CommandKind::SettingsSet => {
                let index = args.required_index()?;
                let field = config_ops::set_at(&mut app.config, index, &args.text)?;
                let (name, description) = (field.name, field.description);
                app.set_info(format!(
                    "Setting \"{}\" changed to \"{}\".",
                    description, args.text
                ));
                app.persist_setting(name, &args.text);
            }
        }
        Ok(())
    }
}

fn show_help(app: &mut App, topic: &str) -> Result<(), CommandError> {
    if topic.is_empty() {
        app.help_text = GENERAL_HELP;
        app.set_info("Help displayed. Input anything to return.");
    } else {
        let command = app
            .find_command(&topic.to_lowercase())
            .map_err(|_| CommandError::NoHelp(topic.to_string()))?;
        app.help_text = command.help_text;
        app.set_info(format!(
            "Help for command \"{}\" displayed. Input anything to return.",
            topic
        ));
    }
    app.change_state(ViewState::Help);
    Ok(())
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

/// The command sets of the three interactive views
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub list_view: CommandRegistry,
    pub task_view: CommandRegistry,
    pub settings: CommandRegistry,
}

/// Build every command once and share them between the view registries.
///
/// Only the list view registers the empty keyword, which is what makes a bare
/// number open a list there and nowhere else.
pub fn build_registries() -> Registries {
    let exit = Rc::new(Command::new("exit", CommandKind::Exit, EXIT_HELP));
    let back = Rc::new(Command::new("back", CommandKind::Back, BACK_HELP));
    let help = Rc::new(Command::new("help", CommandKind::Help, HELP_HELP).with_text(false));
    let settings = Rc::new(Command::new(
        "settings",
        CommandKind::Settings,
        SETTINGS_HELP,
    ));

    let list_enter = Rc::new(Command::new("", CommandKind::ListEnter, &[]).with_index(true));
    let list_add =
        Rc::new(Command::new("add", CommandKind::ListAdd, LIST_ADD_HELP).with_text(true));
    let list_remove =
        Rc::new(Command::new("remove", CommandKind::ListRemove, LIST_REMOVE_HELP).with_index(true));
    let list_rename = Rc::new(
        Command::new("rename", CommandKind::ListRename, LIST_RENAME_HELP)
            .with_index(true)
            .with_text(true),
    );

    let task_add =
        Rc::new(Command::new("add", CommandKind::TaskAdd, TASK_ADD_HELP).with_text(true));
    let task_remove =
        Rc::new(Command::new("remove", CommandKind::TaskRemove, TASK_REMOVE_HELP).with_index(true));
    let task_rename = Rc::new(
        Command::new("rename", CommandKind::TaskRename, TASK_RENAME_HELP)
            .with_index(true)
            .with_text(true),
    );
    let task_done =
        Rc::new(Command::new("done", CommandKind::TaskDone, TASK_DONE_HELP).with_index(true));
    let task_prio =
        Rc::new(Command::new("prio", CommandKind::TaskPrio, TASK_PRIO_HELP).with_index(true));

    let settings_set = Rc::new(
        Command::new("set", CommandKind::SettingsSet, SETTINGS_SET_HELP)
            .with_index(true)
            .with_text(true),
    );

    Registries {
        list_view: CommandRegistry::new(vec![
            Rc::clone(&exit),
            Rc::clone(&help),
            settings,
            list_enter,
            list_add,
            list_remove,
            list_rename,
        ]),
        task_view: CommandRegistry::new(vec![
            Rc::clone(&exit),
            Rc::clone(&back),
            Rc::clone(&help),
            task_add,
            task_remove,
            task_rename,
            task_done,
            task_prio,
        ]),
        settings: CommandRegistry::new(vec![exit, back, help, settings_set]),
    }
}

// ---------------------------------------------------------------------------
// Help texts
// ---------------------------------------------------------------------------

pub const GENERAL_HELP: &[&str] = &[
    "Lists is controlled with text commands. You can see the list of",
    "available commands in the pane on the right.",
    "",
    "Commands begin with a keyword, sometimes followed by arguments.",
    "",
    "The argument \"#\" refers to an item index, for example the number",
    "of a list or a task. You can see the index next to each item",
    "on the main screen, for example:",
    "",
    "#2 Wash the dishes",
    "",
    "The argument \"...\" stands for any text of your choice, like",
    "the full description of a new task. Surrounding the text in quotes",
    "is not required.",
    "",
    "You can also receive help on a specific command, like this:",
    "",
    "help rename",
];

const EXIT_HELP: &[&str] = &[
    "Syntax: exit",
    "",
    "Leave the program immediately. All changes are saved.",
];

const BACK_HELP: &[&str] = &[
    "Syntax: back",
    "",
    "Return to the previous screen. For example, in task view,",
    "it will bring you back to list view.",
];

const HELP_HELP: &[&str] = &[
    "Syntax (1): help",
    "Syntax (2): help ...",
    "",
    "In the (1) form, display general help about using Lists.",
    "",
    "In the (2) form, display help about a specific command.",
    "The text argument is the name of the command, without any symbols",
    "or arguments. The command must exist in the current view, so, for",
    "example, in task view you won't be able to get help about",
    "list-specific commands.",
];

const SETTINGS_HELP: &[&str] = &[
    "Syntax: settings",
    "",
    "Enter the settings. Here you can change some program behavior.",
    "All settings are automatically saved.",
];

const LIST_ADD_HELP: &[&str] = &[
    "Syntax: add ...",
    "",
    "Add a new empty list with the provided name. After adding",
    "the list, you will probably want to enter it with",
    "the \"#\" command (just the list index), and add some tasks to it.",
];

const LIST_REMOVE_HELP: &[&str] = &[
    "Syntax: remove #",
    "",
    "Remove the list under the given index. Be very careful with this",
    "command, and always double-check the index - there is currently",
    "no way to undo this operation.",
];

const LIST_RENAME_HELP: &[&str] = &[
    "Syntax: rename # ...",
    "",
    "Change the name of a list under the given index. The contents",
    "of the list stay unchanged.",
];

const TASK_ADD_HELP: &[&str] = &[
    "Syntax: add ...",
    "",
    "Add a task to the list. The task will be added at the end,",
    "in an un-done state.",
];

const TASK_REMOVE_HELP: &[&str] = &[
    "Syntax: remove #",
    "",
    "Remove the task under the given index. Be very careful with this",
    "command, and always double-check the index - there is currently",
    "no way to undo this operation. Consider marking the task as done",
    "instead.",
];

const TASK_RENAME_HELP: &[&str] = &[
    "Syntax: rename # ...",
    "",
    "Edit the task under the given index. The task will stay marked",
    "as done or priority, only the text will change.",
];

const TASK_DONE_HELP: &[&str] = &[
    "Syntax: done #",
    "",
    "Mark a task as done, or undo the mark to turn the task active",
    "again. In the settings you can choose whether done tasks are",
    "just greyed out, printed with replacement text,",
    "or skipped entirely.",
];

const TASK_PRIO_HELP: &[&str] = &[
    "Syntax: prio #",
    "",
    "Mark a task as priority, or undo the mark to restore normal",
    "priority. This change is purely visual - priority tasks are",
    "printed with a color accent. It has no effect on tasks marked",
    "as done.",
];

const SETTINGS_SET_HELP: &[&str] = &[
    "Syntax: set # ...",
    "",
    "Change a setting under the provided index to a different value.",
    "If a list of values is shown to the right of the setting,",
    "the value must match one of them.",
];
