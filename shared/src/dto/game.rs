use serde::{Deserialize, Serialize};

/// Game code used when the caller does not pick one.
pub const DEFAULT_GAME_CODE: &str = "0000";

/// Bet placed on a single spin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinRequest {
    pub amount: f64,
}

/// Outcome of a spin as resolved by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    pub bet_id: i64,
    /// Display symbols, one per reel
    pub result: Vec<String>,
    pub bet_amount: f64,
    pub win_amount: f64,
    pub is_win: bool,
    pub balance_before: f64,
    pub balance_after: f64,
    #[serde(default)]
    pub message: String,
}

/// Current balance of the authenticated player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub username: String,
    pub balance: f64,
}

/// Reel symbol display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolConfig {
    pub name: String,
    pub display: String,
    pub weight: f64,
    pub multiplier: f64,
}

/// Query for the paged bet history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BetRecordsRequest {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl Default for BetRecordsRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            game_code: None,
            start_time: None,
            end_time: None,
        }
    }
}

/// One settled bet from the history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub id: i64,
    pub game_code: String,
    pub bet_amount: f64,
    pub win_amount: f64,
    pub is_win: bool,
    #[serde(default)]
    pub result: Vec<String>,
    /// Epoch milliseconds
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_result_wire_format() {
        let json = r#"{
            "betId": 42,
            "result": ["7", "7", "7"],
            "betAmount": 10,
            "winAmount": 500,
            "isWin": true,
            "balanceBefore": 100,
            "balanceAfter": 590,
            "message": "Jackpot!"
        }"#;
        let spin: SpinResult = serde_json::from_str(json).unwrap();
        assert_eq!(spin.bet_id, 42);
        assert!(spin.is_win);
        assert_eq!(spin.balance_after, 590.0);
        assert_eq!(spin.result.len(), 3);
    }

    #[test]
    fn test_records_request_omits_empty_filters() {
        let json = serde_json::to_value(BetRecordsRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "page": 1, "size": 10 }));

        let filtered = BetRecordsRequest {
            game_code: Some("0001".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(filtered).unwrap();
        assert_eq!(json["gameCode"], "0001");
    }
}
