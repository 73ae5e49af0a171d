use serde::{Deserialize, Serialize};

/// Deposit request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositRequest {
    pub amount: f64,
}

/// Kind of wallet movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdraw => "Withdraw",
        }
    }
}

/// Result of a deposit or withdrawal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    pub username: String,
    pub balance_before: f64,
    pub balance_after: f64,
    pub amount: f64,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_response_wire_format() {
        let json = r#"{
            "username": "alice",
            "balanceBefore": 250.0,
            "balanceAfter": 0,
            "amount": 250.0,
            "transactionType": "WITHDRAW",
            "message": "Withdraw all successful"
        }"#;
        let wallet: WalletResponse = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.transaction_type, TransactionType::Withdraw);
        assert_eq!(wallet.balance_after, 0.0);
    }
}
