//! # Common Error Types
//!
//! Consolidated error handling for the terminal client.
//!
//! ## Error Categories
//!
//! - **Client**: normalized backend failures ([`ClientError`]), including
//!   401/403 session expiry
//! - **Storage**: the session file could not be read or written
//! - **Config**: invalid environment or flag values
//! - **LoginRequired**: a protected command ran without a session
//!
//! ## Usage Pattern
//!
//! ```rust
//! use slot_terminal::core::error::{AppError, Result};
//!
//! fn pick_game(code: &str) -> Result<&str> {
//!     if code.is_empty() {
//!         return Err(AppError::Config("Game code cannot be empty".to_string()));
//!     }
//!     Ok(code)
//! }
//!
//! assert!(pick_game("").is_err());
//! ```

use shared::ClientError;
use thiserror::Error;

use crate::services::session::StorageError;

/// Application-wide error type for the terminal client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed or input was rejected before sending.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Session file could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A protected command ran while logged out; the user is sent to login.
    #[error("Please log in first (slot-terminal login)")]
    LoginRequired,
}

impl AppError {
    /// True when the error leaves the user without a usable session.
    pub fn requires_login(&self) -> bool {
        match self {
            AppError::Client(err) => err.requires_login(),
            AppError::LoginRequired => true,
            _ => false,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display_is_transparent() {
        let err = AppError::from(ClientError::Rejected("Insufficient balance".to_string()));
        assert_eq!(err.to_string(), "Insufficient balance");
        assert!(!err.requires_login());
    }

    #[test]
    fn test_expired_session_requires_login() {
        assert!(AppError::from(ClientError::Unauthorized).requires_login());
        assert!(AppError::LoginRequired.requires_login());
    }
}
