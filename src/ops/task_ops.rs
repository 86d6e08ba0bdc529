use crate::model::{List, Task};

use super::position;

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("There is no task with index \"{0}\".")]
    NotFound(i64),
}

fn task_mut(list: &mut List, index: i64) -> Result<&mut Task, TaskError> {
    let pos = position(index, list.len()).ok_or(TaskError::NotFound(index))?;
    list.get_mut(pos).ok_or(TaskError::NotFound(index))
}

/// Append an active task at the end of the list
pub fn add_task(list: &mut List, body: &str) {
    list.push(Task::new(body));
}

/// Remove a task, returning it
pub fn remove_task(list: &mut List, index: i64) -> Result<Task, TaskError> {
    let pos = position(index, list.len()).ok_or(TaskError::NotFound(index))?;
    list.remove(pos).ok_or(TaskError::NotFound(index))
}

/// Replace a task's body, keeping its flags. Returns the old body.
pub fn rename_task(list: &mut List, index: i64, body: &str) -> Result<String, TaskError> {
    let task = task_mut(list, index)?;
    Ok(std::mem::replace(&mut task.body, body.to_string()))
}

/// Toggle done: done → not done, not done → done
pub fn toggle_done(list: &mut List, index: i64) -> Result<&Task, TaskError> {
    let task = task_mut(list, index)?;
    task.toggle_done();
    Ok(&*task)
}

/// Toggle priority: prio → normal, normal → prio
pub fn toggle_prio(list: &mut List, index: i64) -> Result<&Task, TaskError> {
    let task = task_mut(list, index)?;
    task.toggle_prio();
    Ok(&*task)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> List {
        let mut list = List::new("Main");
        add_task(&mut list, "Hello world!");
        add_task(&mut list, "How are you?");
        add_task(&mut list, "I'm fine, thanks");
        list
    }

    #[test]
    fn add_appends_undone_task() {
        let mut list = sample_list();
        add_task(&mut list, "Last");
        assert_eq!(list.tasks[3], Task::new("Last"));
    }

    #[test]
    fn remove_by_one_based_index() {
        let mut list = sample_list();
        let removed = remove_task(&mut list, 1).unwrap();
        assert_eq!(removed.body, "Hello world!");
        assert_eq!(list.tasks[0].body, "How are you?");
    }

    #[test]
    fn out_of_range_leaves_list_untouched() {
        let mut list = sample_list();
        let before = list.clone();
        assert_eq!(remove_task(&mut list, 4), Err(TaskError::NotFound(4)));
        assert_eq!(rename_task(&mut list, 0, "x"), Err(TaskError::NotFound(0)));
        assert_eq!(toggle_done(&mut list, -2).unwrap_err(), TaskError::NotFound(-2));
        assert_eq!(toggle_prio(&mut list, 9).unwrap_err(), TaskError::NotFound(9));
        assert_eq!(list, before);
    }

    #[test]
    fn rename_preserves_flags() {
        let mut list = sample_list();
        list.tasks[1].done = true;
        list.tasks[1].prio = true;
        let old = rename_task(&mut list, 2, "Fine, really").unwrap();
        assert_eq!(old, "How are you?");
        assert_eq!(
            list.tasks[1],
            Task {
                body: "Fine, really".into(),
                done: true,
                prio: true
            }
        );
    }

    #[test]
    fn toggle_twice_restores() {
        let mut list = sample_list();
        assert!(toggle_done(&mut list, 3).unwrap().done);
        assert!(!toggle_done(&mut list, 3).unwrap().done);
        assert!(toggle_prio(&mut list, 3).unwrap().prio);
        assert!(!toggle_prio(&mut list, 3).unwrap().prio);
        assert_eq!(list, sample_list());
    }
}
