//! # Core Abstractions
//!
//! Core traits, configuration and error types shared by the terminal client.
//!
//! ## Modules
//!
//! - **[`config`]**: Environment-driven client configuration (`ClientConfig`)
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Backend service trait for dependency injection (`SlotApi`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use slot_terminal::core::{ClientConfig, SlotApi};
//! use slot_terminal::services::{api::ApiClient, session::open_shared};
//!
//! let config = ClientConfig::from_env().unwrap();
//! let session = open_shared(config.session_file()).unwrap();
//! let api: Arc<dyn SlotApi> = Arc::new(ApiClient::new(&config, session));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::{ApiResult, SlotApi};
