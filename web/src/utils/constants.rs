//! Application constants

/// Relative API root; the dev server proxies it to the backend.
pub const API_BASE: &str = "/api";

/// Bet presets offered on the game page
pub const BET_OPTIONS: &[f64] = &[1.0, 5.0, 10.0, 50.0, 100.0];

pub const DEFAULT_BET: f64 = 10.0;

/// Deposit presets offered on the wallet page
pub const DEPOSIT_OPTIONS: &[f64] = &[100.0, 500.0, 1000.0, 5000.0];

/// Bet records per page
pub const RECORDS_PAGE_SIZE: u32 = 10;

// UI constants
pub const TOAST_DURATION_MS: u32 = 3000;
