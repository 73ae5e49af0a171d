//! # Wallet Endpoints
//!
//! Deposits and full withdrawals.

use reqwest::Method;
use shared::{DepositRequest, WalletResponse};

use super::client::ApiClient;
use crate::core::service::ApiResult;

/// Deposit into the player's balance.
#[tracing::instrument(skip(client, request), fields(amount = request.amount))]
pub async fn deposit(client: &ApiClient, request: DepositRequest) -> ApiResult<WalletResponse> {
    let result = client
        .execute::<WalletResponse>(client.request(Method::POST, "/wallet/deposit").json(&request))
        .await;
    if let Ok(Some(wallet)) = result.as_ref().map(|r| r.data.as_ref()) {
        tracing::info!(balance_after = wallet.balance_after, "Deposit completed");
    }
    result
}

/// Withdraw the whole balance.
#[tracing::instrument(skip(client))]
pub async fn withdraw_all(client: &ApiClient) -> ApiResult<WalletResponse> {
    let result = client
        .execute::<WalletResponse>(client.request(Method::POST, "/wallet/withdraw-all"))
        .await;
    if let Ok(Some(wallet)) = result.as_ref().map(|r| r.data.as_ref()) {
        tracing::info!(amount = wallet.amount, "Withdrawal completed");
    }
    result
}
