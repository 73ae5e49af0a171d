//! # Game Endpoints
//!
//! Spins, balance and bet history.

use reqwest::Method;
use shared::{encode_segment, BalanceResponse, BetRecord, BetRecordsRequest, PageData, SpinRequest, SpinResult};

use super::client::ApiClient;
use crate::core::service::ApiResult;

/// Place a bet on `game_code`.
#[tracing::instrument(skip(client, request), fields(amount = request.amount))]
pub async fn spin(client: &ApiClient, request: SpinRequest, game_code: &str) -> ApiResult<SpinResult> {
    let path = format!("/game/spin/{}", encode_segment(game_code));
    let result = client
        .execute::<SpinResult>(client.request(Method::POST, &path).json(&request))
        .await;

    if let Ok(response) = &result {
        if let Some(spin) = &response.data {
            tracing::info!(
                bet_id = spin.bet_id,
                win = spin.is_win,
                win_amount = spin.win_amount,
                balance_after = spin.balance_after,
                "Spin settled"
            );
        }
    }
    result
}

/// Get the current balance.
#[tracing::instrument(skip(client))]
pub async fn get_balance(client: &ApiClient) -> ApiResult<BalanceResponse> {
    client.execute(client.request(Method::GET, "/game/balance")).await
}

/// Get one page of bet history.
#[tracing::instrument(skip(client, request), fields(page = request.page, size = request.size))]
pub async fn get_records(client: &ApiClient, request: BetRecordsRequest) -> ApiResult<PageData<BetRecord>> {
    client
        .execute(client.request(Method::POST, "/game/records").json(&request))
        .await
}
