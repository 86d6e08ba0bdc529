use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory lock held while the data file is read or replaced.
///
/// Uses flock (Unix) on a sibling lock file so two running sessions never
/// interleave a save with a load.
#[derive(Debug)]
pub struct FileLock {
    _file: File,
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not lock {path}: another lists session may be saving")]
    Timeout { path: PathBuf },
}

impl FileLock {
    /// Lock file guarding `data_path`: same directory, the full file name
    /// with `.lock` appended, so it never names the data file itself
    pub fn lock_path_for(data_path: &Path) -> PathBuf {
        let mut name = data_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        data_path.with_file_name(name)
    }

    /// Take the lock at `lock_path`, waiting up to `timeout` for another
    /// holder to let go.
    pub fn acquire(lock_path: &Path, timeout: Duration) -> Result<Self, LockError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path.to_path_buf(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    return Ok(FileLock {
                        _file: file,
                        path: lock_path.to_path_buf(),
                    });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => {
                    return Err(LockError::Timeout {
                        path: lock_path.to_path_buf(),
                    });
                }
            }
        }
    }

    pub fn acquire_default(lock_path: &Path) -> Result<Self, LockError> {
        Self::acquire(lock_path, Duration::from_secs(5))
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // flock is released with the descriptor
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}
