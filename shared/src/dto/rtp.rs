use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// How far the observed RTP sits from its target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RtpStatus {
    Optimal,
    High,
    Low,
}

impl RtpStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RtpStatus::Optimal => "OPTIMAL",
            RtpStatus::High => "HIGH",
            RtpStatus::Low => "LOW",
        }
    }
}

/// RTP statistics for one game, or for the whole system when `game_code` is `None`.
///
/// Percentages (`target_rtp`, `actual_rtp`, `rtp_difference`) are expressed
/// in percent, e.g. `96.5`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RtpStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    pub target_rtp: f64,
    pub actual_rtp: f64,
    pub total_bet_amount: f64,
    pub total_win_amount: f64,
    pub total_bet_count: u64,
    pub average_bet: f64,
    pub average_win: f64,
    pub rtp_difference: f64,
    pub rtp_status: Option<RtpStatus>,
    /// Set by the backend instead of the figures when it cannot compute them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RtpStatistics {
    /// Turn an embedded backend error into a rejection.
    pub fn checked(self) -> Result<Self, ClientError> {
        match self.error {
            Some(error) => Err(ClientError::Rejected(error)),
            None => Ok(self),
        }
    }

    pub fn title(&self) -> String {
        match (&self.game_name, &self.game_code) {
            (Some(name), Some(code)) => format!("{} ({})", name, code),
            (None, Some(code)) => format!("Game {}", code),
            (Some(name), None) => name.clone(),
            (None, None) => "System".to_string(),
        }
    }
}

/// Per-game statistics plus the system-wide aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllGamesRtpStatistics {
    #[serde(default)]
    pub games: Vec<RtpStatistics>,
    pub system_rtp: RtpStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_wire_format() {
        let json = r#"{
            "gameCode": "0000",
            "targetRtp": 96.0,
            "actualRtp": 97.25,
            "totalBetAmount": 1000.00,
            "totalWinAmount": 972.50,
            "totalBetCount": 100,
            "averageBet": 10.00,
            "averageWin": 9.73,
            "rtpDifference": 1.25,
            "rtpStatus": "OPTIMAL"
        }"#;
        let stats: RtpStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.rtp_status, Some(RtpStatus::Optimal));
        assert_eq!(stats.total_bet_count, 100);
        assert_eq!(stats.title(), "Game 0000");
        assert!(stats.checked().is_ok());
    }

    #[test]
    fn test_embedded_error_is_rejected() {
        let stats: RtpStatistics =
            serde_json::from_str(r#"{"error":"Game configuration not found"}"#).unwrap();
        assert_eq!(
            stats.checked(),
            Err(ClientError::Rejected("Game configuration not found".to_string()))
        );
    }

    #[test]
    fn test_system_title() {
        assert_eq!(RtpStatistics::default().title(), "System");
    }
}
