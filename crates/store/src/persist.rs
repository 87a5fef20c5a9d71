use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use shared_types::AppError;

/// Snapshot key for the current session blob.
pub const SESSION_KEY: &str = "session";
/// Snapshot key for the full officer directory blob.
pub const DIRECTORY_KEY: &str = "directory";

/// Keyed blob persistence for store snapshots.
///
/// Two blobs exist: the sanitized session user and the full directory. They
/// are read once at startup and rewritten on every mutating call. Writes are
/// synchronous; the caller treats failures as best-effort.
pub trait SnapshotStore {
    /// Load the blob under `key`, or `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write the blob under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> Result<(), AppError>;

    /// Delete the blob under `key`. Missing keys are fine.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

// ── File-backed implementation ──────────────────────────────────────

/// One JSON file per key under a data directory.
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read snapshot {}: {e}",
                path.display()
            ))),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                self.dir.display()
            ))
        })?;
        let path = self.path_for(key);
        fs::write(&path, blob).map_err(|e| {
            AppError::storage(format!("Failed to write snapshot {}: {e}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove snapshot {}: {e}",
                path.display()
            ))),
        }
    }
}

// ── In-memory implementation (tests) ────────────────────────────────

/// HashMap-backed snapshot store. Interior mutability keeps the trait
/// surface `&self` for the file store's benefit; the store is
/// single-threaded throughout.
#[derive(Default)]
pub struct MemorySnapshotStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), AppError> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
