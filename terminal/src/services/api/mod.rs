//! # Backend API Client Module
//!
//! HTTP client for the slot game backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, request/response interceptors, SlotApi impl
//! ├── auth.rs     - Register, login, logout
//! ├── game.rs     - Spin, balance, bet records
//! ├── wallet.rs   - Deposit, withdraw all
//! └── rtp.rs      - RTP statistics and reset
//! ```
//!
//! All paths are relative to the configured base URL, which already carries
//! the `/api` prefix.

pub mod auth;
pub mod client;
pub mod game;
pub mod rtp;
pub mod wallet;

pub use client::ApiClient;
