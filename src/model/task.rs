use serde::{Deserialize, Serialize};

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text
    pub body: String,
    /// Completed
    #[serde(default)]
    pub done: bool,
    /// Visual emphasis only; ignored while `done` is set
    #[serde(default)]
    pub prio: bool,
}

impl Task {
    /// Create an active, non-priority task
    pub fn new(body: impl Into<String>) -> Self {
        Task {
            body: body.into(),
            done: false,
            prio: false,
        }
    }

    /// Flip the done flag and return the new value
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Flip the priority flag and return the new value
    pub fn toggle_prio(&mut self) -> bool {
        self.prio = !self.prio;
        self.prio
    }

    /// Whether the task should be drawn with the priority accent
    pub fn is_emphasized(&self) -> bool {
        self.prio && !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_active() {
        let task = Task::new("Buy milk");
        assert_eq!(task.body, "Buy milk");
        assert!(!task.done);
        assert!(!task.prio);
    }

    #[test]
    fn toggles_are_self_inverse() {
        let mut task = Task::new("x");
        assert!(task.toggle_done());
        assert!(!task.toggle_done());
        assert!(!task.done);

        assert!(task.toggle_prio());
        assert!(!task.toggle_prio());
        assert!(!task.prio);
    }

    #[test]
    fn done_suppresses_emphasis() {
        let mut task = Task::new("x");
        task.prio = true;
        assert!(task.is_emphasized());
        task.done = true;
        assert!(!task.is_emphasized());
    }
}
