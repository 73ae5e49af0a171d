//! `localStorage` backend for the shared session store

use shared::SessionStorage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("localStorage {op} failed for key {key:?}")]
    Operation { op: &'static str, key: String },
}

/// Handle on `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for LocalStorage {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|_| StorageError::Operation {
            op: "read",
            key: key.to_string(),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|_| StorageError::Operation {
            op: "write",
            key: key.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(|_| StorageError::Operation {
            op: "remove",
            key: key.to_string(),
        })
    }
}
