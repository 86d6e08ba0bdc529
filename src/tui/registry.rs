use std::rc::Rc;

use super::command::{Command, CommandError};

/// Ordered set of commands available in one view
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Rc<Command>>,
}

impl CommandRegistry {
    pub fn new(commands: Vec<Rc<Command>>) -> Self {
        CommandRegistry { commands }
    }

    /// First command registered under `keyword`
    pub fn find(&self, keyword: &str) -> Result<&Rc<Command>, CommandError> {
        self.commands
            .iter()
            .find(|c| c.keyword == keyword)
            .ok_or_else(|| CommandError::NotFound(keyword.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Command>> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Invocations of every command, in registration order
    pub fn invocations(&self) -> Vec<String> {
        self.commands.iter().flat_map(|c| c.invocations()).collect()
    }
}
