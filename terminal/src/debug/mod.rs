//! # Logging
//!
//! File-based structured logging for the terminal client.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG` or `SLOT_LOG`: Log level filter (e.g., `slot_terminal=debug,info`)
//! - `SLOT_LOG_DIR`: Log directory (default: `<SLOT_HOME>/logs`)
//! - `SLOT_LOG_FORMAT`: `json` for JSON lines, plain text otherwise

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
