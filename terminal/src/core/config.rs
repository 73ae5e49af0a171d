//! Client configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

use shared::DEFAULT_GAME_CODE;

use super::error::{AppError, Result};

/// Backend used when `SLOT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
/// Request timeout used when `SLOT_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Terminal client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix
    pub api_url: String,
    pub timeout: Duration,
    /// Directory holding `session.json`
    pub session_dir: PathBuf,
    /// Game used by `spin` and `rtp` when none is given
    pub game_code: String,
    /// Game that `records` is limited to; all games when unset
    pub game_filter: Option<String>,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let session_dir = match std::env::var("SLOT_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_session_dir()?,
        };

        let timeout_secs = match std::env::var("SLOT_TIMEOUT_SECS") {
            Ok(value) => parse_timeout_secs(&value)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let log_dir = std::env::var("SLOT_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| session_dir.join("logs"));

        let game_filter = std::env::var("SLOT_GAME_CODE").ok();

        Ok(Self {
            api_url: std::env::var("SLOT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            game_code: game_filter
                .clone()
                .unwrap_or_else(|| DEFAULT_GAME_CODE.to_string()),
            game_filter,
            session_dir,
            log_dir,
        })
    }

    /// Configuration rooted in `dir`, used by tests and embedders.
    pub fn with_session_dir(api_url: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        let session_dir = dir.into();
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            game_code: DEFAULT_GAME_CODE.to_string(),
            game_filter: None,
            log_dir: session_dir.join("logs"),
            session_dir,
        }
    }

    /// Select the game for spin, rtp and records.
    pub fn select_game(&mut self, game_code: impl Into<String>) {
        let game_code = game_code.into();
        self.game_filter = Some(game_code.clone());
        self.game_code = game_code;
    }

    pub fn session_file(&self) -> PathBuf {
        self.session_dir.join("session.json")
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

/// A zero timeout would fail every request, so it is rejected with the rest.
fn parse_timeout_secs(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Config(format!(
            "SLOT_TIMEOUT_SECS must be a positive number of seconds, got {:?}",
            value
        ))),
    }
}

fn default_session_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".slot-terminal"))
        .ok_or_else(|| AppError::Config("Cannot determine home directory; set SLOT_HOME".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_session_dir() {
        let config = ClientConfig::with_session_dir("http://localhost:9000/api/", "/tmp/slot");
        assert_eq!(config.base_url(), "http://localhost:9000/api");
        assert_eq!(config.session_file(), PathBuf::from("/tmp/slot/session.json"));
        assert_eq!(config.game_code, "0000");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_timeout_must_be_positive() {
        assert_eq!(parse_timeout_secs("30").unwrap(), 30);
        assert_eq!(parse_timeout_secs(" 5 ").unwrap(), 5);
        for bad in ["0", "-1", "soon", ""] {
            assert!(matches!(parse_timeout_secs(bad), Err(AppError::Config(_))));
        }
    }
}
