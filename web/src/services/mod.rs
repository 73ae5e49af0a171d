//! # Services
//!
//! `http` is the single place requests are sent from: it attaches the
//! bearer token, applies the response policy and reacts to 401/403.

pub mod http;
