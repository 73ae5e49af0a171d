//! Global reactive state

pub mod storage;
pub mod toast;
pub mod user;
