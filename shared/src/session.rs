//! # Session Store
//!
//! Holds the authenticated player's token, username and balance. Token and
//! username survive restarts through a [`SessionStorage`] backend (browser
//! `localStorage`, a file, or memory); the balance is only kept in memory and
//! is refreshed from the server.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::dto::AuthResponse;
use crate::error::SessionReset;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the remembered username.
pub const USERNAME_KEY: &str = "username";

/// Key/value persistence used by [`SessionStore`].
pub trait SessionStorage {
    type Error: std::error::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;
}

/// Non-persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Infallible> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Snapshot of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub balance: f64,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    /// Bearer token, if there is one.
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

/// Session state mirrored into a storage backend.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore token and username from storage. The balance starts at zero.
    pub fn load(storage: S) -> Result<Self, S::Error> {
        let session = Session {
            token: storage.get(TOKEN_KEY)?.unwrap_or_default(),
            username: storage.get(USERNAME_KEY)?.unwrap_or_default(),
            balance: 0.0,
        };
        Ok(Self { session, storage })
    }

    /// Logged-out session over `storage`, ignoring whatever it holds.
    pub fn empty(storage: S) -> Self {
        Self {
            session: Session::default(),
            storage,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn username(&self) -> &str {
        &self.session.username
    }

    pub fn balance(&self) -> f64 {
        self.session.balance
    }

    pub fn set_token(&mut self, token: &str) -> Result<(), S::Error> {
        self.session.token = token.to_string();
        self.storage.set(TOKEN_KEY, token)
    }

    pub fn set_user_info(&mut self, username: &str, balance: f64) -> Result<(), S::Error> {
        self.session.username = username.to_string();
        self.session.balance = balance;
        self.storage.set(USERNAME_KEY, username)
    }

    /// Adopt the session handed out by login or register.
    pub fn apply_auth(&mut self, auth: &AuthResponse) -> Result<(), S::Error> {
        self.set_token(&auth.token)?;
        self.set_user_info(&auth.username, auth.balance)
    }

    /// In-memory only; the server stays authoritative.
    pub fn set_balance(&mut self, balance: f64) {
        self.session.balance = balance;
    }

    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.session = Session::default();
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USERNAME_KEY)
    }

    /// Recover from a 401/403 answer.
    pub fn reset(&mut self, reset: SessionReset) -> Result<(), S::Error> {
        match reset {
            SessionReset::Token => {
                self.session.token.clear();
                self.session.balance = 0.0;
                self.storage.remove(TOKEN_KEY)
            }
            SessionReset::Full => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::load(MemoryStorage::new()).unwrap();
        store
            .apply_auth(&AuthResponse {
                token: "tok".to_string(),
                username: "alice".to_string(),
                balance: 100.0,
            })
            .unwrap();
        store
    }

    #[test]
    fn test_load_restores_token_and_username() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USERNAME_KEY, "alice").unwrap();

        let store = SessionStore::load(storage).unwrap();
        assert!(store.is_logged_in());
        assert_eq!(store.username(), "alice");
        assert_eq!(store.balance(), 0.0);
    }

    #[test]
    fn test_empty_storage_is_logged_out() {
        let store = SessionStore::load(MemoryStorage::new()).unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_apply_auth_persists_token_and_username() {
        let store = logged_in();
        assert_eq!(store.token(), Some("tok"));
        assert_eq!(store.balance(), 100.0);
        assert_eq!(store.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert_eq!(store.storage().get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_set_balance_is_not_persisted() {
        let mut store = logged_in();
        store.set_balance(42.0);
        assert_eq!(store.balance(), 42.0);

        let reloaded = SessionStore::load(store.storage().clone()).unwrap();
        assert_eq!(reloaded.balance(), 0.0);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = logged_in();
        store.clear().unwrap();
        assert_eq!(store.session(), &Session::default());
        assert!(!store.storage().contains(TOKEN_KEY));
        assert!(!store.storage().contains(USERNAME_KEY));
    }

    #[test]
    fn test_token_reset_keeps_username() {
        let mut store = logged_in();
        store.reset(SessionReset::Token).unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.username(), "alice");
        assert!(!store.storage().contains(TOKEN_KEY));
        assert!(store.storage().contains(USERNAME_KEY));
    }

    #[test]
    fn test_full_reset_forgets_username() {
        let mut store = logged_in();
        store.reset(SessionReset::Full).unwrap();
        assert_eq!(store.username(), "");
        assert!(!store.storage().contains(USERNAME_KEY));
    }

    #[test]
    fn test_empty_ignores_stored_values() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();

        let store = SessionStore::empty(storage);
        assert!(!store.is_logged_in());
        assert!(store.storage().contains(TOKEN_KEY));
    }
}
