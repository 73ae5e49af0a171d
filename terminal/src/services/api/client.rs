//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every call goes through the same two steps:
//!
//! - **request**: attach `Authorization: Bearer <token>` when a session exists,
//!   plus an `X-Request-Id` for log correlation
//! - **response**: apply [`shared::error::normalize`]; on 401/403 reset the
//!   stored session so the next command is sent to login

use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    error::normalize, AllGamesRtpStatistics, ApiResponse, AuthResponse, BalanceResponse, BetRecord,
    BetRecordsRequest, ClientError, DepositRequest, LoginRequest, PageData, RegisterRequest,
    RtpStatistics, SessionReset, SpinRequest, SpinResult, WalletResponse,
};
use uuid::Uuid;

use crate::core::config::ClientConfig;
use crate::core::service::{ApiResult, SlotApi};
use crate::services::session::SharedSession;

/// HTTP client for communicating with the slot backend.
///
/// Holds a connection pool and a handle on the shared session, so the token
/// set by login is picked up by later calls without re-creating the client.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: SharedSession,
}

impl ApiClient {
    /// Create a client over an existing session.
    pub fn new(config: &ClientConfig, session: SharedSession) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url().to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with the session token attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match self.session.read().token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and normalize the answer.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        let response = request
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%request_id, error = %e, "Network error");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!(%request_id, status, error = %e, "Failed to read response body");
            ClientError::Network(e.to_string())
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let result = normalize::<T>(status, &body);

        match &result {
            Ok(_) => tracing::debug!(%request_id, status, duration_ms, "Request succeeded"),
            Err(err) => {
                tracing::warn!(%request_id, status, duration_ms, error = %err, "Request failed");
                if let Some(reset) = err.session_reset() {
                    self.reset_session(reset);
                }
            }
        }
        result
    }

    /// Drop the stored credentials after the backend refused them.
    fn reset_session(&self, reset: SessionReset) {
        if let Err(e) = self.session.write().reset(reset) {
            tracing::error!(error = %e, ?reset, "Failed to reset session");
        } else {
            tracing::info!(?reset, "Session reset after authorization failure");
        }
    }
}

// Implement SlotApi trait for ApiClient
#[async_trait::async_trait]
impl SlotApi for ApiClient {
    async fn register(&self, request: RegisterRequest) -> ApiResult<AuthResponse> {
        crate::services::api::auth::register(self, request).await
    }

    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse> {
        crate::services::api::auth::login(self, request).await
    }

    async fn logout(&self) -> ApiResult<()> {
        crate::services::api::auth::logout(self).await
    }

    async fn spin(&self, request: SpinRequest, game_code: &str) -> ApiResult<SpinResult> {
        crate::services::api::game::spin(self, request, game_code).await
    }

    async fn get_balance(&self) -> ApiResult<BalanceResponse> {
        crate::services::api::game::get_balance(self).await
    }

    async fn get_records(&self, request: BetRecordsRequest) -> ApiResult<PageData<BetRecord>> {
        crate::services::api::game::get_records(self, request).await
    }

    async fn deposit(&self, request: DepositRequest) -> ApiResult<WalletResponse> {
        crate::services::api::wallet::deposit(self, request).await
    }

    async fn withdraw_all(&self) -> ApiResult<WalletResponse> {
        crate::services::api::wallet::withdraw_all(self).await
    }

    async fn get_rtp_statistics(&self, game_code: &str) -> ApiResult<RtpStatistics> {
        crate::services::api::rtp::get_rtp_statistics(self, game_code).await
    }

    async fn get_all_games_rtp_statistics(&self) -> ApiResult<AllGamesRtpStatistics> {
        crate::services::api::rtp::get_all_games_rtp_statistics(self).await
    }

    async fn reset_rtp_statistics(&self, game_code: &str) -> ApiResult<()> {
        crate::services::api::rtp::reset_rtp_statistics(self, game_code).await
    }
}
