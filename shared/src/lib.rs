//! # Slot Client Shared Library
//!
//! This library defines the contract between the slot clients (terminal/web) and
//! the game backend, plus the client-side session rules both clients follow.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: `ApiResponse<T>` envelope and paging
//!   - **[`dto::auth`]**: Login/register DTOs
//!   - **[`dto::game`]**: Spin, balance and bet record DTOs
//!   - **[`dto::wallet`]**: Deposit and withdraw DTOs
//!   - **[`dto::rtp`]**: Return-to-player statistics
//! - **[`error`]**: Normalized client errors and the response policy
//! - **[`routes`]**: Route table and navigation guard
//! - **[`session`]**: Session state persisted through a key/value storage
//! - **[`utils`]**: Formatting and input validation
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON wrapped in an envelope:
//!
//! ```text
//! { "success": true, "message": "Login successful", "data": { ... } }
//! ```
//!
//! ## Usage in a Client
//!
//! ```rust
//! use shared::dto::auth::AuthResponse;
//! use shared::error::normalize;
//!
//! let body = r#"{"success":true,"message":"ok","data":{"token":"t","username":"alice","balance":100.0}}"#;
//! let envelope = normalize::<AuthResponse>(200, body).unwrap();
//! assert_eq!(envelope.data.unwrap().username, "alice");
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod session;
pub mod utils;

// Wildcard re-exports: shared is a contract library where all exports are public API
pub use dto::*;
pub use error::{ClientError, SessionReset};
pub use routes::{navigate, Navigation, Route};
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore};
pub use utils::*;
