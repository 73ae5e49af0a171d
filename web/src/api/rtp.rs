//! RTP statistics endpoints

use shared::{encode_segment, AllGamesRtpStatistics, ApiResponse, RtpStatistics};

use crate::services::http::{Api, ApiResult};

pub async fn get_rtp_statistics(api: &Api, game_code: &str) -> ApiResult<RtpStatistics> {
    let path = format!("/rtp/statistics/{}", encode_segment(game_code));
    api.get(&path).await
}

pub async fn get_all_games_rtp_statistics(api: &Api) -> ApiResult<AllGamesRtpStatistics> {
    api.get("/rtp/statistics/all").await
}

pub async fn reset_rtp_statistics(api: &Api, game_code: &str) -> ApiResult<()> {
    let path = format!("/rtp/reset/{}", encode_segment(game_code));
    api.post::<serde_json::Value>(&path)
        .await
        .map(ApiResponse::without_data)
}
