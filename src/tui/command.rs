use crate::model::ConfigError;
use crate::model::NotebookError;
use crate::ops::list_ops::ListError;
use crate::ops::task_ops::TaskError;
use crate::parse::UserInput;

use super::app::App;
use super::command_actions::CommandKind;

/// Broad category of a command failure, used to pick the feedback wording
/// and by callers that need to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CommandNotFound,
    MissingArgument,
    TooManyArguments,
    InvalidIndex,
    IndexOutOfRange,
    InvalidConfigValue,
    CapacityExceeded,
}

/// Error type for resolving, validating and running a command.
/// Every variant is recoverable: the session reports it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command \"{0}\"")]
    NotFound(String),
    #[error("Help for command \"{0}\" not found")]
    NoHelp(String),
    #[error("Not enough arguments provided for command \"{0}\"")]
    MissingArgument(String),
    #[error("Too many arguments provided for command \"{0}\"")]
    TooManyArguments(String),
    #[error("Index value \"{0}\" is not valid")]
    InvalidIndex(String),
    #[error("No list is open.")]
    NoActiveList,
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::NotFound(_) | CommandError::NoHelp(_) => ErrorKind::CommandNotFound,
            CommandError::MissingArgument(_) => ErrorKind::MissingArgument,
            CommandError::TooManyArguments(_) => ErrorKind::TooManyArguments,
            CommandError::InvalidIndex(_) => ErrorKind::InvalidIndex,
            CommandError::NoActiveList => ErrorKind::IndexOutOfRange,
            CommandError::List(ListError::NotFound(_)) => ErrorKind::IndexOutOfRange,
            CommandError::List(ListError::Notebook(NotebookError::CapacityExceeded { .. })) => {
                ErrorKind::CapacityExceeded
            }
            CommandError::Task(TaskError::NotFound(_)) => ErrorKind::IndexOutOfRange,
            CommandError::Config(ConfigError::InvalidValue { .. }) => ErrorKind::InvalidConfigValue,
            CommandError::Config(ConfigError::NotFound(_) | ConfigError::UnknownField(_)) => {
                ErrorKind::IndexOutOfRange
            }
        }
    }
}

/// Which arguments a command accepts, and which of those it requires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgShape {
    pub has_index: bool,
    pub index_required: bool,
    pub has_text: bool,
    pub text_required: bool,
}

/// Validated arguments handed to a command's action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// Keyword the command was invoked with
    pub keyword: String,
    /// Parsed index, `None` when no index was given
    pub index: Option<i64>,
    /// Text argument, empty when none was given
    pub text: String,
}

impl Arguments {
    /// The index of a command that requires one
    pub fn required_index(&self) -> Result<i64, CommandError> {
        self.index
            .ok_or_else(|| CommandError::MissingArgument(self.keyword.clone()))
    }
}

/// A user command: keyword, argument contract, help text and the action it
/// runs. Built once at startup and shared between view registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub keyword: &'static str,
    pub kind: CommandKind,
    /// Lines shown on the help screen for this command
    pub help_text: &'static [&'static str],
    pub args: ArgShape,
}

impl Command {
    /// A command that takes no arguments
    pub fn new(keyword: &'static str, kind: CommandKind, help_text: &'static [&'static str]) -> Self {
        Command {
            keyword,
            kind,
            help_text,
            args: ArgShape::default(),
        }
    }

    /// Accept an index argument
    pub fn with_index(mut self, required: bool) -> Self {
        self.args.has_index = true;
        self.args.index_required = required;
        self
    }

    /// Accept a text argument
    pub fn with_text(mut self, required: bool) -> Self {
        self.args.has_text = true;
        self.args.text_required = required;
        self
    }

    /// All syntactically valid ways to call this command, `#` standing for an
    /// index and `...` for text.
    pub fn invocations(&self) -> Vec<String> {
        let a = self.args;
        let kw = self.keyword;

        // Index-only shortcut: just the number
        if kw.is_empty() && a.has_index {
            return vec!["#".to_string()];
        }

        let mut result = Vec::new();
        if !a.index_required && !a.text_required {
            result.push(kw.to_string());
        }
        if a.has_index && !a.text_required {
            result.push(format!("{} #", kw));
        }
        if a.has_index && a.has_text {
            result.push(format!("{} # ...", kw));
        }
        if !a.index_required && a.has_text {
            result.push(format!("{} ...", kw));
        }
        result
    }

    /// Check the input against this command's argument contract.
    ///
    /// Missing arguments are reported before surplus ones, and both before a
    /// malformed index.
    pub fn validate(&self, input: &UserInput) -> Result<Arguments, CommandError> {
        debug_assert_eq!(
            self.keyword, input.keyword,
            "registry routed input to the wrong command"
        );
        let a = self.args;

        let (index, text) = match (a.has_index, a.has_text) {
            (true, false) => (input.args.as_str(), ""),
            (false, true) => ("", input.args.as_str()),
            _ => (input.index_arg.as_str(), input.text_arg.as_str()),
        };

        if (a.index_required && index.is_empty()) || (a.text_required && text.is_empty()) {
            return Err(CommandError::MissingArgument(self.keyword.to_string()));
        }
        if (!a.has_index && !index.is_empty()) || (!a.has_text && !text.is_empty()) {
            return Err(CommandError::TooManyArguments(self.keyword.to_string()));
        }

        let index = if index.is_empty() {
            None
        } else {
            Some(
                index
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidIndex(index.to_string()))?,
            )
        };

        Ok(Arguments {
            keyword: self.keyword.to_string(),
            index,
            text: text.to_string(),
        })
    }

    /// Validate the input and run the action exactly once
    pub fn validate_and_run(&self, app: &mut App, input: &UserInput) -> Result<(), CommandError> {
        let args = self.validate(input)?;
        self.kind.execute(app, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    const NO_HELP: &[&str] = &[];

    fn cmd(keyword: &'static str) -> Command {
        Command::new(keyword, CommandKind::Exit, NO_HELP)
    }

    #[test]
    fn invocations_follow_flags() {
        assert_eq!(cmd("exit").invocations(), vec!["exit"]);
        assert_eq!(
            cmd("help").with_text(false).invocations(),
            vec!["help", "help ..."]
        );
        assert_eq!(cmd("add").with_text(true).invocations(), vec!["add ..."]);
        assert_eq!(cmd("done").with_index(true).invocations(), vec!["done #"]);
        assert_eq!(cmd("show").with_index(false).invocations(), vec!["show", "show #"]);
        assert_eq!(
            cmd("rename").with_index(true).with_text(true).invocations(),
            vec!["rename # ..."]
        );
        assert_eq!(
            cmd("note").with_index(false).with_text(false).invocations(),
            vec!["note", "note #", "note # ...", "note ..."]
        );
        assert_eq!(cmd("").with_index(true).invocations(), vec!["#"]);
    }

    #[test]
    fn index_only_takes_whole_args() {
        let c = cmd("done").with_index(true);
        let args = c.validate(&parse("done 3")).unwrap();
        assert_eq!(args.index, Some(3));
        assert_eq!(args.text, "");

        let err = c.validate(&parse("done 3 4")).unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex("3 4".into()));
    }

    #[test]
    fn text_only_takes_whole_args() {
        let c = cmd("add").with_text(true);
        let args = c.validate(&parse("add 2 eggs   please")).unwrap();
        assert_eq!(args.index, None);
        assert_eq!(args.text, "2 eggs   please");
    }

    #[test]
    fn index_and_text_are_split() {
        let c = cmd("rename").with_index(true).with_text(true);
        let args = c.validate(&parse("rename 2 Groceries  for Monday")).unwrap();
        assert_eq!(args.index, Some(2));
        assert_eq!(args.text, "Groceries  for Monday");
    }

    #[test]
    fn missing_is_checked_before_invalid_index() {
        let c = cmd("rename").with_index(true).with_text(true);
        let err = c.validate(&parse("rename 2")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        let err = c.validate(&parse("rename x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        let err = c.validate(&parse("rename")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
    }

    #[test]
    fn surplus_is_checked_before_invalid_index() {
        let c = cmd("exit");
        let err = c.validate(&parse("exit now")).unwrap_err();
        assert_eq!(err, CommandError::TooManyArguments("exit".into()));
    }

    #[test]
    fn non_numeric_index() {
        let c = cmd("remove").with_index(true);
        let err = c.validate(&parse("remove two")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);
        assert_eq!(err.to_string(), "Index value \"two\" is not valid");
    }

    #[test]
    fn absent_optional_index_is_none() {
        let c = cmd("help").with_text(false);
        let args = c.validate(&parse("help")).unwrap();
        assert_eq!(args.index, None);
        assert_eq!(args.text, "");
        assert_eq!(
            args.required_index(),
            Err(CommandError::MissingArgument("help".into()))
        );
    }

    #[test]
    fn negative_index_parses() {
        let c = cmd("done").with_index(true);
        assert_eq!(c.validate(&parse("done -1")).unwrap().index, Some(-1));
    }

    #[test]
    fn error_kinds() {
        assert_eq!(
            CommandError::from(ListError::Notebook(NotebookError::CapacityExceeded { limit: 19 }))
                .kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(
            CommandError::from(TaskError::NotFound(3)).kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            CommandError::from(ConfigError::InvalidValue {
                value: "x".into(),
                field: "y".into()
            })
            .kind(),
            ErrorKind::InvalidConfigValue
        );
        assert_eq!(
            CommandError::NoHelp("zap".into()).kind(),
            ErrorKind::CommandNotFound
        );
    }
}
