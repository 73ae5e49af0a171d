//! # RTP Statistics Endpoints

use reqwest::Method;
use shared::{encode_segment, AllGamesRtpStatistics, ApiResponse, RtpStatistics};

use super::client::ApiClient;
use crate::core::service::ApiResult;

/// Get statistics for one game.
#[tracing::instrument(skip(client))]
pub async fn get_rtp_statistics(client: &ApiClient, game_code: &str) -> ApiResult<RtpStatistics> {
    let path = format!("/rtp/statistics/{}", encode_segment(game_code));
    client.execute(client.request(Method::GET, &path)).await
}

/// Get statistics for every game plus the system aggregate.
#[tracing::instrument(skip(client))]
pub async fn get_all_games_rtp_statistics(client: &ApiClient) -> ApiResult<AllGamesRtpStatistics> {
    client
        .execute(client.request(Method::GET, "/rtp/statistics/all"))
        .await
}

/// Reset the counters of one game.
#[tracing::instrument(skip(client))]
pub async fn reset_rtp_statistics(client: &ApiClient, game_code: &str) -> ApiResult<()> {
    let path = format!("/rtp/reset/{}", encode_segment(game_code));
    let result = client
        .execute::<serde_json::Value>(client.request(Method::POST, &path))
        .await
        .map(ApiResponse::without_data);
    if result.is_ok() {
        tracing::info!("RTP statistics reset");
    }
    result
}
