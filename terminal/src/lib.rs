//! # Slot Terminal - Library Root
//!
//! Command-line client for the slot machine backend. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              slot-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  clap          - Command line parsing                  │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - File-based structured logs            │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (Bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Slot backend   │
//! │  /api/*         │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] orchestrator, route guard, command handlers and the
//!   [`UserStore`](app::UserStore)
//! - **cli**: clap command definitions
//! - **core**: configuration, error type and the [`SlotApi`](core::SlotApi) trait
//! - **debug**: logging setup
//! - **services**: backend client and session file
//! - **ui**: terminal output helpers
//!
//! Request and response types, the session model, the route table and the
//! error normalization policy live in the `shared` crate so the web client
//! applies exactly the same rules.

pub mod app;
pub mod cli;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::App;
pub use core::{AppError, Result};
