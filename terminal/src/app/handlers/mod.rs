//! # Command Handlers
//!
//! Command handlers organized by domain.

pub mod auth;
pub mod game;
pub mod navigation;
pub mod rtp;
pub mod wallet;
