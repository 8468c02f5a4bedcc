//! 文件存储（占位实现）
//!
//! Holds a base path but performs no file I/O: `save` drops the record and
//! `load` always reports the absent result. `status()` returns
//! [`BackendStatus::Unimplemented`] so callers can detect this.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::r#trait::UserStorage;
use crate::errors::StorageError;
use crate::types::{BackendKind, BackendStatus, User};

#[derive(Debug, Clone)]
pub struct FileStorage {
    name: String,

    /// Where records would be written. Not validated, never created.
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            name: BackendKind::File.as_str().to_string(),
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl UserStorage for FileStorage {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BackendKind {
        BackendKind::File
    }

    fn save(&mut self, user: User) -> Result<(), StorageError> {
        warn!(
            "file storage is not implemented, record dropped: email={}, base_path={}",
            user.email,
            self.base_path.display()
        );
        Ok(())
    }

    fn load(&self, email: &str) -> Result<Option<User>, StorageError> {
        debug!("file storage is not implemented, returning absent: email={}", email);
        Ok(None)
    }

    fn status(&self) -> BackendStatus {
        BackendStatus::Unimplemented
    }
}
