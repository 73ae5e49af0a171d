//! Backend endpoints, one module per API area

pub mod auth;
pub mod game;
pub mod rtp;
pub mod wallet;
