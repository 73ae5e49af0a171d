//! # Services Module
//!
//! External integrations of the terminal client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/         - Backend HTTP client
//! │                  (auth, game, wallet, rtp)
//! └── session.rs   - Session file (token + username)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               slot-terminal                  │
//! │                                              │
//! │  ┌──────────────┐  shares  ┌──────────────┐  │
//! │  │  ApiClient   │◄────────►│ SharedSession│  │
//! │  │  (api/)      │          │ (session.rs) │  │
//! │  └──────┬───────┘          └──────┬───────┘  │
//! └─────────┼─────────────────────────┼──────────┘
//!           │ HTTP/JSON               │ JSON file
//!           ▼                         ▼
//! ┌─────────────────────┐   ┌─────────────────────┐
//! │  Slot backend       │   │ ~/.slot-terminal/   │
//! │  /api/auth/*        │   │   session.json      │
//! │  /api/game/*        │   └─────────────────────┘
//! │  /api/wallet/*      │
//! │  /api/rtp/*         │
//! └─────────────────────┘
//! ```
//!
//! The client reads the token from the shared session for every request and
//! writes to it when the backend answers 401/403.

pub mod api;
pub mod session;
