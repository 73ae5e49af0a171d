//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AllGamesRtpStatistics, ApiResponse, AuthResponse, BalanceResponse, BetRecord,
    BetRecordsRequest, ClientError, DepositRequest, LoginRequest, PageData, RegisterRequest,
    RtpStatistics, SpinRequest, SpinResult, WalletResponse,
};

/// Result of one backend call: the success envelope or a normalized error.
pub type ApiResult<T> = Result<ApiResponse<T>, ClientError>;

/// Trait for the slot backend operations
///
/// Implemented by [`crate::services::api::ApiClient`]; tests can substitute
/// their own implementation.
#[async_trait]
pub trait SlotApi: Send + Sync {
    /// Create an account and receive a session
    async fn register(&self, request: RegisterRequest) -> ApiResult<AuthResponse>;

    /// Log in and receive a session
    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse>;

    /// Invalidate the current session server-side
    async fn logout(&self) -> ApiResult<()>;

    /// Place a bet on the given game
    async fn spin(&self, request: SpinRequest, game_code: &str) -> ApiResult<SpinResult>;

    /// Current balance of the logged-in player
    async fn get_balance(&self) -> ApiResult<BalanceResponse>;

    /// Paged bet history of the logged-in player
    async fn get_records(&self, request: BetRecordsRequest) -> ApiResult<PageData<BetRecord>>;

    async fn deposit(&self, request: DepositRequest) -> ApiResult<WalletResponse>;

    /// Withdraw the whole balance
    async fn withdraw_all(&self) -> ApiResult<WalletResponse>;

    async fn get_rtp_statistics(&self, game_code: &str) -> ApiResult<RtpStatistics>;

    async fn get_all_games_rtp_statistics(&self) -> ApiResult<AllGamesRtpStatistics>;

    async fn reset_rtp_statistics(&self, game_code: &str) -> ApiResult<()>;
}
