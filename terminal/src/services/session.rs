//! # Session File
//!
//! File-backed [`SessionStorage`]: a flat JSON object of string keys to string
//! values, rewritten on every change. The terminal's equivalent of browser
//! `localStorage`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{SessionStorage, SessionStore};
use thiserror::Error;

/// Session shared between the API client (token header, 401/403 recovery)
/// and the user store.
pub type SharedSession = Arc<RwLock<SessionStore<FileStorage>>>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: malformed session file: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key/value pairs persisted in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the session file, starting empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| StorageError::Json {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if self.entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(io_err)?;
            }
            return Ok(());
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&self.entries).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        write_private(&self.path, content.as_bytes()).map_err(io_err)
    }
}

/// Write `content` readable by the owner only; the file holds a bearer token.
#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(content)
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(path, content)
}

impl SessionStorage for FileStorage {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Load the session stored at `path` and wrap it for sharing.
pub fn open_shared(path: impl Into<PathBuf>) -> Result<SharedSession, StorageError> {
    let store = SessionStore::load(FileStorage::open(path)?)?;
    Ok(Arc::new(RwLock::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::session::{TOKEN_KEY, USERNAME_KEY};

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USERNAME_KEY, "alice").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert_eq!(reopened.get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_removing_last_key_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "tok").unwrap();
        assert!(path.exists());

        storage.remove(TOKEN_KEY).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(FileStorage::open(&path), Err(StorageError::Json { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "tok").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
