use crate::model::{List, Notebook, NotebookError};

use super::position;

/// Error type for list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("There is no list with index \"{0}\".")]
    NotFound(i64),
    #[error(transparent)]
    Notebook(#[from] NotebookError),
}

/// Resolve a 1-based list index to its 0-based position
pub fn list_position(notebook: &Notebook, index: i64) -> Result<usize, ListError> {
    position(index, notebook.len()).ok_or(ListError::NotFound(index))
}

/// Append a new empty list
pub fn add_list(notebook: &mut Notebook, name: &str) -> Result<(), ListError> {
    notebook.push(List::new(name))?;
    Ok(())
}

/// Remove a list and all its tasks, returning it
pub fn remove_list(notebook: &mut Notebook, index: i64) -> Result<List, ListError> {
    let pos = list_position(notebook, index)?;
    notebook.remove(pos).ok_or(ListError::NotFound(index))
}

/// Rename a list in place, returning the old name
pub fn rename_list(notebook: &mut Notebook, index: i64, name: &str) -> Result<String, ListError> {
    let pos = list_position(notebook, index)?;
    let list = notebook.get_mut(pos).ok_or(ListError::NotFound(index))?;
    Ok(std::mem::replace(&mut list.name, name.to_string()))
}
