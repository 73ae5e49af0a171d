//! # Terminal Output
//!
//! Text rendering for the CLI: notifications and tables.

pub mod notifications;
pub mod tables;

pub use notifications::{print_error, print_field, print_info, print_success};
pub use tables::{records_table, rtp_table};
