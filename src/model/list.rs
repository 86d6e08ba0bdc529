use super::task::Task;

/// A named, ordered collection of tasks. Order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl List {
    pub fn new(name: impl Into<String>) -> Self {
        List {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task at the end
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, pos: usize) -> Option<&Task> {
        self.tasks.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Task> {
        self.tasks.get_mut(pos)
    }

    /// Remove the task at a 0-based position
    pub fn remove(&mut self, pos: usize) -> Option<Task> {
        if pos < self.tasks.len() {
            Some(self.tasks.remove(pos))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked done
    pub fn count_done(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}
