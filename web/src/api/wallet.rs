//! Wallet endpoints

use shared::{DepositRequest, WalletResponse};

use crate::services::http::{Api, ApiResult};

pub async fn deposit(api: &Api, request: &DepositRequest) -> ApiResult<WalletResponse> {
    api.post_json("/wallet/deposit", request).await
}

/// Withdraw the whole balance.
pub async fn withdraw_all(api: &Api) -> ApiResult<WalletResponse> {
    api.post("/wallet/withdraw-all").await
}
