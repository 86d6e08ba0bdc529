use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::list::List;
use super::task::Task;

/// Most lists a notebook can hold (layout ceiling of the overview screen)
pub const MAX_LISTS: usize = 19;

/// Version tag written into every persisted document
pub const DOCUMENT_VERSION: u32 = 1;

/// Error type for notebook invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotebookError {
    #[error("Cannot add more than {limit} lists.")]
    CapacityExceeded { limit: usize },
}

/// Error type for converting a persisted document back into a notebook
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("unsupported document version {found} (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("document holds {count} lists, the limit is {limit}")]
    TooManyLists { count: usize, limit: usize },
}

/// All lists owned by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub lists: Vec<List>,
}

impl Notebook {
    pub fn new() -> Self {
        Notebook::default()
    }

    /// Append a list. Fails without mutating once `MAX_LISTS` is reached.
    pub fn push(&mut self, list: List) -> Result<(), NotebookError> {
        if self.is_full() {
            return Err(NotebookError::CapacityExceeded { limit: MAX_LISTS });
        }
        self.lists.push(list);
        Ok(())
    }

    pub fn get(&self, pos: usize) -> Option<&List> {
        self.lists.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut List> {
        self.lists.get_mut(pos)
    }

    /// Remove the list at a 0-based position, together with its tasks
    pub fn remove(&mut self, pos: usize) -> Option<List> {
        if pos < self.lists.len() {
            Some(self.lists.remove(pos))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lists.len() >= MAX_LISTS
    }

    /// Snapshot the notebook into its persisted form
    pub fn to_document(&self) -> NotebookDocument {
        NotebookDocument {
            version: DOCUMENT_VERSION,
            saved_at: Some(Utc::now()),
            lists: self
                .lists
                .iter()
                .map(|list| ListDocument {
                    name: list.name.clone(),
                    tasks: list.tasks.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a notebook from its persisted form
    pub fn from_document(doc: NotebookDocument) -> Result<Self, DocumentError> {
        if doc.version != DOCUMENT_VERSION {
            return Err(DocumentError::VersionMismatch {
                found: doc.version,
                expected: DOCUMENT_VERSION,
            });
        }
        if doc.lists.len() > MAX_LISTS {
            return Err(DocumentError::TooManyLists {
                count: doc.lists.len(),
                limit: MAX_LISTS,
            });
        }
        let lists = doc
            .lists
            .into_iter()
            .map(|l| List {
                name: l.name,
                tasks: l.tasks,
            })
            .collect();
        Ok(Notebook { lists })
    }
}

/// Persisted representation of a notebook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookDocument {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lists: Vec<ListDocument>,
}

/// Persisted representation of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDocument {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}
