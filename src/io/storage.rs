use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::{DocumentError, Notebook, NotebookDocument};

use super::lock::{FileLock, LockError};

/// Error type for loading and saving the notebook
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A place the serialized notebook lives. The bytes are opaque here;
/// encoding is handled by `load_notebook`/`save_notebook`.
pub trait Storage {
    /// Fetch the stored bytes, `None` when nothing has been stored yet
    fn download(&self) -> Result<Option<Vec<u8>>, StorageError>;
    fn upload(&self, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Notebook kept in a single JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<FileLock, StorageError> {
        Ok(FileLock::acquire_default(&FileLock::lock_path_for(
            &self.path,
        ))?)
    }
}

impl Storage for FileStorage {
    fn download(&self) -> Result<Option<Vec<u8>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let _lock = self.lock()?;
        fs::read(&self.path)
            .map(Some)
            .map_err(|e| StorageError::ReadError {
                path: self.path.clone(),
                source: e,
            })
    }

    fn upload(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let write_err = |e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        };
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let _lock = self.lock()?;
        atomic_write(&self.path, bytes).map_err(write_err)
    }
}

/// Write to a temp file in the same directory, then rename over the target
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Default data file: `$XDG_DATA_HOME/lists/lists.json`, falling back to
/// `~/.local/share/lists/lists.json`
pub fn default_data_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/share")))?;
    Some(base.join("lists").join("lists.json"))
}

pub fn encode_document(doc: &NotebookDocument) -> Result<Vec<u8>, StorageError> {
    let mut bytes = serde_json::to_vec_pretty(doc)?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn decode_document(bytes: &[u8]) -> Result<NotebookDocument, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load the notebook. Nothing stored yet gives an empty notebook.
pub fn load_notebook(storage: &dyn Storage) -> Result<Notebook, StorageError> {
    match storage.download()? {
        None => Ok(Notebook::new()),
        Some(bytes) => Ok(Notebook::from_document(decode_document(&bytes)?)?),
    }
}

pub fn save_notebook(storage: &dyn Storage, notebook: &Notebook) -> Result<(), StorageError> {
    let bytes = encode_document(&notebook.to_document())?;
    storage.upload(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::model::{List, Task};

    #[derive(Default)]
    struct MemoryStorage {
        blob: RefCell<Option<Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn download(&self) -> Result<Option<Vec<u8>>, StorageError> {
            Ok(self.blob.borrow().clone())
        }

        fn upload(&self, bytes: &[u8]) -> Result<(), StorageError> {
            *self.blob.borrow_mut() = Some(bytes.to_vec());
            Ok(())
        }
    }

    #[test]
    fn empty_storage_gives_empty_notebook() {
        let nb = load_notebook(&MemoryStorage::default()).unwrap();
        assert!(nb.is_empty());
    }

    #[test]
    fn save_then_load() {
        let storage = MemoryStorage::default();
        let mut list = List::new("Main");
        list.push(Task::new("Hello world!"));
        let mut nb = Notebook::new();
        nb.push(list).unwrap();

        save_notebook(&storage, &nb).unwrap();
        assert_eq!(load_notebook(&storage).unwrap(), nb);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let json = br#"{"version":1,"lists":[{"name":"A","tasks":[{"body":"x"}]}]}"#;
        let doc = decode_document(json).unwrap();
        assert!(!doc.lists[0].tasks[0].done);
        assert!(!doc.lists[0].tasks[0].prio);
        assert!(doc.saved_at.is_none());
    }

    #[test]
    fn garbage_is_malformed() {
        let storage = MemoryStorage::default();
        storage.upload(b"not json").unwrap();
        assert!(matches!(
            load_notebook(&storage),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn wrong_version_is_a_document_error() {
        let storage = MemoryStorage::default();
        storage.upload(br#"{"version":2,"lists":[]}"#).unwrap();
        assert!(matches!(
            load_notebook(&storage),
            Err(StorageError::Document(DocumentError::VersionMismatch { found: 2, .. }))
        ));
    }

    #[test]
    fn data_file_with_lock_extension_survives_save() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.lock");
        let storage = FileStorage::new(&path);

        save_notebook(&storage, &Notebook::new()).unwrap();
        assert!(path.exists());
        assert!(load_notebook(&storage).unwrap().is_empty());
        assert!(path.exists());
    }

    #[test]
    fn file_storage_creates_parent_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/lists.json");
        let storage = FileStorage::new(&path);
        assert!(storage.download().unwrap().is_none());

        storage.upload(b"{}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");
        assert!(!FileLock::lock_path_for(&path).exists());
    }
}
