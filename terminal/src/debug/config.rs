//! Logging configuration from environment variables

use std::path::PathBuf;

use crate::core::config::ClientConfig;

/// Filter used when neither `RUST_LOG` nor `SLOT_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "slot_terminal=info,warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory of the daily-rotated log file
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub file_name: String,
    /// Log level filter (e.g., "slot_terminal=debug,info")
    pub log_level: String,
    /// Write JSON lines instead of plain text
    pub json: bool,
}

impl LogConfig {
    /// Load configuration for the given client
    pub fn from_env(client: &ClientConfig) -> Self {
        Self {
            log_dir: client.log_dir.clone(),
            file_name: "slot-terminal.log".to_string(),
            log_level: std::env::var("SLOT_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            json: std::env::var("SLOT_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_follows_client_config() {
        let client = ClientConfig::with_session_dir("http://localhost/api", "/tmp/slot");
        let config = LogConfig::from_env(&client);
        assert_eq!(config.log_file(), PathBuf::from("/tmp/slot/logs/slot-terminal.log"));
    }
}
