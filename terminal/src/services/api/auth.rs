//! # Authentication Endpoints
//!
//! Handles account creation, login and logout.

use reqwest::Method;
use shared::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::service::ApiResult;

/// Register a new player.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting registration");
    let result = client
        .execute(client.request(Method::POST, "/auth/register").json(&request))
        .await;
    if result.is_ok() {
        tracing::info!("Registration successful");
    }
    result
}

/// Login with username and password.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting login");
    let result = client
        .execute(client.request(Method::POST, "/auth/login").json(&request))
        .await;
    if result.is_ok() {
        tracing::info!("Login successful");
    }
    result
}

/// Invalidate the session server-side.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    client
        .execute::<serde_json::Value>(client.request(Method::POST, "/auth/logout"))
        .await
        .map(ApiResponse::without_data)
}
