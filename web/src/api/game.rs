//! Game endpoints

use shared::{
    encode_segment, BalanceResponse, BetRecord, BetRecordsRequest, PageData, SpinRequest,
    SpinResult,
};

use crate::services::http::{Api, ApiResult};

/// Place a bet on `game_code`.
pub async fn spin(api: &Api, request: &SpinRequest, game_code: &str) -> ApiResult<SpinResult> {
    let path = format!("/game/spin/{}", encode_segment(game_code));
    api.post_json(&path, request).await
}

pub async fn get_balance(api: &Api) -> ApiResult<BalanceResponse> {
    api.get("/game/balance").await
}

/// One page of the player's bet history.
pub async fn get_records(api: &Api, request: &BetRecordsRequest) -> ApiResult<PageData<BetRecord>> {
    api.post_json("/game/records", request).await
}
