//! Atomic text file operations.
//!
//! Writes go through a temporary file plus rename under an exclusive lock, so
//! readers see either the old contents or the new ones, never a torn file.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use jobscout_core::JobScoutError;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

impl From<AtomicFileError> for JobScoutError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::IoError(io) => io.into(),
            AtomicFileError::LockError(message) => JobScoutError::storage(message),
        }
    }
}

/// A handle to a text file that is replaced atomically.
///
/// - **Atomicity**: updates are all-or-nothing via tmp file + rename
/// - **Isolation**: an exclusive lock serializes writers across processes
/// - **Durability**: explicit fsync before rename
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
    private: bool,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            private: false,
        }
    }

    /// Restricts written files to the owner (mode 600 on Unix).
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: file exists and is not blank
    /// - `Ok(None)`: file doesn't exist or is blank
    /// - `Err`: failed to read the file
    pub fn load(&self) -> Result<Option<String>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file contents atomically.
    pub fn save(&self, content: &str) -> Result<(), AtomicFileError> {
        let _lock = FileLock::acquire(&self.path)?;

        // Write to temporary file in the same directory
        let tmp_path = self.get_temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        self.restrict_permissions(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Deletes the file. Succeeds when it does not exist.
    pub fn remove(&self) -> Result<(), AtomicFileError> {
        if !self.path.exists() {
            return Ok(());
        }

        let _lock = FileLock::acquire(&self.path)?;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Gets a temporary file path for atomic writes.
    fn get_temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    #[cfg(unix)]
    fn restrict_permissions(&self, path: &Path) -> Result<(), AtomicFileError> {
        if self.private {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self, _path: &Path) -> Result<(), AtomicFileError> {
        Ok(())
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself stays on disk. Removing it while held would let a
/// waiter lock the unlinked inode while a newcomer locks a fresh file.
struct FileLock {
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock next to `path`, creating parent directories.
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        use fs2::FileExt;
        file.lock_exclusive()
            .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
