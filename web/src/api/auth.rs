//! Authentication endpoints

use shared::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest};

use crate::services::http::{Api, ApiResult};

pub async fn register(api: &Api, request: &RegisterRequest) -> ApiResult<AuthResponse> {
    api.post_json("/auth/register", request).await
}

pub async fn login(api: &Api, request: &LoginRequest) -> ApiResult<AuthResponse> {
    api.post_json("/auth/login", request).await
}

pub async fn logout(api: &Api) -> ApiResult<()> {
    api.post::<serde_json::Value>("/auth/logout")
        .await
        .map(ApiResponse::without_data)
}
