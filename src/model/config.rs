/// Error type for configuration changes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("There is no setting with index \"{0}\".")]
    NotFound(i64),
    #[error("There is no setting named \"{0}\".")]
    UnknownField(String),
    #[error("\"{value}\" is not an allowed value for setting \"{field}\".")]
    InvalidValue { value: String, field: String },
}

/// A single configuration field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
    /// Identifier used in code and in the settings file
    pub name: &'static str,
    /// Human-readable label shown on the settings screen
    pub description: &'static str,
    value: String,
    /// Legal values. Empty means any value is accepted.
    pub allowed: Vec<String>,
}

impl ConfigField {
    pub fn new(
        name: &'static str,
        description: &'static str,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        let field = ConfigField {
            name,
            description,
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        };
        debug_assert!(
            field.accepts(&field.value),
            "default {:?} for {} is not an allowed value",
            field.value,
            field.name
        );
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|v| v == value)
    }

    /// Replace the value, rejecting anything outside the allowed set
    pub fn assign(&mut self, value: &str) -> Result<(), ConfigError> {
        if !self.accepts(value) {
            return Err(ConfigError::InvalidValue {
                value: value.to_string(),
                field: self.description.to_string(),
            });
        }
        self.value = value.to_string();
        Ok(())
    }
}

/// How done tasks are shown in the task view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneTaskDisplay {
    /// Full text, greyed out
    Yes,
    /// Skipped entirely
    No,
    /// Replaced by the `done_marker` text
    Hidden,
}

pub const PRINT_DONE_TASKS: &str = "print_done_tasks";
pub const DONE_MARKER: &str = "done_marker";
pub const SHOW_PROGRESS: &str = "show_progress";

/// Ordered set of named configuration fields.
///
/// A field with a non-empty allowed set never holds a value outside it: every
/// mutation goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    fields: Vec<ConfigField>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(vec![
            ConfigField::new(
                PRINT_DONE_TASKS,
                "Show done tasks",
                "hidden",
                &["yes", "no", "hidden"],
            ),
            ConfigField::new(DONE_MARKER, "Hidden task text", "===", &[]),
            ConfigField::new(SHOW_PROGRESS, "Show list progress", "yes", &["yes", "no"]),
        ])
    }
}

impl Config {
    pub fn new(fields: Vec<ConfigField>) -> Self {
        debug_assert!(
            fields.iter().all(|f| f.accepts(&f.value)),
            "config built with a value outside its allowed set"
        );
        Config { fields }
    }

    pub fn fields(&self) -> &[ConfigField] {
        &self.fields
    }

    /// Current value of a field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find(name).map(|f| f.value())
    }

    /// Set a field by name
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| ConfigError::UnknownField(name.to_string()))?
            .assign(value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at a 0-based position
    pub fn field(&self, pos: usize) -> Option<&ConfigField> {
        self.fields.get(pos)
    }

    pub fn field_mut(&mut self, pos: usize) -> Option<&mut ConfigField> {
        self.fields.get_mut(pos)
    }

    pub fn done_task_display(&self) -> DoneTaskDisplay {
        match self.get(PRINT_DONE_TASKS) {
            Some("yes") => DoneTaskDisplay::Yes,
            Some("no") => DoneTaskDisplay::No,
            _ => DoneTaskDisplay::Hidden,
        }
    }

    pub fn done_marker(&self) -> &str {
        self.get(DONE_MARKER).unwrap_or("===")
    }

    pub fn show_progress(&self) -> bool {
        self.get(SHOW_PROGRESS) != Some("no")
    }

    fn find(&self, name: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
