//! # Navigation Handlers
//!
//! Route guard applied before every command.

use shared::{format_amount, navigate, Navigation, Route};

use crate::app::store::UserStore;
use crate::core::error::{AppError, Result};
use crate::ui::{print_field, print_info};

/// Check whether the command's view may be entered.
///
/// Commands without a view always proceed. A redirect to login becomes
/// [`AppError::LoginRequired`]; any other redirect is returned to the caller.
pub(crate) fn enter(store: &UserStore, route: Option<Route>) -> Result<Navigation> {
    let Some(route) = route else {
        return Ok(Navigation::Proceed);
    };

    match navigate(route, store.is_logged_in()) {
        Navigation::Redirect(Route::Login) => {
            tracing::info!(route = route.name(), "Access denied: login required");
            Err(AppError::LoginRequired)
        }
        navigation => Ok(navigation),
    }
}

/// Explain a redirect away from login/register.
pub(crate) fn show_redirect(store: &UserStore, target: Route) {
    tracing::debug!(target = target.name(), "Redirected");
    print_info(&format!("Already logged in as {}", store.username()));
    print_field("Balance", &format_amount(store.balance()));
    print_info("Run `slot-terminal logout` first to switch accounts");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::{ApiResult, SlotApi};
    use async_trait::async_trait;
    use parking_lot::RwLock;
    use shared::*;
    use std::sync::Arc;

    use crate::services::session::{FileStorage, SharedSession};

    struct Offline;

    #[async_trait]
    impl SlotApi for Offline {
        async fn register(&self, _: RegisterRequest) -> ApiResult<AuthResponse> {
            Err(ClientError::Network("offline".into()))
        }
        async fn login(&self, _: LoginRequest) -> ApiResult<AuthResponse> {
            Err(ClientError::Network("offline".into()))
        }
        async fn logout(&self) -> ApiResult<()> {
            Err(ClientError::Network("offline".into()))
        }
        async fn spin(&self, _: SpinRequest, _: &str) -> ApiResult<SpinResult> {
            Err(ClientError::Network("offline".into()))
        }
        async fn get_balance(&self) -> ApiResult<BalanceResponse> {
            Err(ClientError::Network("offline".into()))
        }
        async fn get_records(&self, _: BetRecordsRequest) -> ApiResult<PageData<BetRecord>> {
            Err(ClientError::Network("offline".into()))
        }
        async fn deposit(&self, _: DepositRequest) -> ApiResult<WalletResponse> {
            Err(ClientError::Network("offline".into()))
        }
        async fn withdraw_all(&self) -> ApiResult<WalletResponse> {
            Err(ClientError::Network("offline".into()))
        }
        async fn get_rtp_statistics(&self, _: &str) -> ApiResult<RtpStatistics> {
            Err(ClientError::Network("offline".into()))
        }
        async fn get_all_games_rtp_statistics(&self) -> ApiResult<AllGamesRtpStatistics> {
            Err(ClientError::Network("offline".into()))
        }
        async fn reset_rtp_statistics(&self, _: &str) -> ApiResult<()> {
            Err(ClientError::Network("offline".into()))
        }
    }

    fn store(dir: &tempfile::TempDir, token: Option<&str>) -> UserStore {
        let storage = FileStorage::open(dir.path().join("session.json")).unwrap();
        let mut session = SessionStore::load(storage).unwrap();
        if let Some(token) = token {
            session.set_token(token).unwrap();
            session.set_user_info("alice", 0.0).unwrap();
        }
        let shared: SharedSession = Arc::new(RwLock::new(session));
        UserStore::new(Arc::new(Offline), shared)
    }

    #[test]
    fn test_protected_view_requires_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir, None);

        for route in [Route::Game, Route::Wallet, Route::Statistics, Route::Records] {
            assert!(matches!(enter(&store, Some(route)), Err(AppError::LoginRequired)));
        }
        assert_eq!(enter(&store, Some(Route::Login)).unwrap(), Navigation::Proceed);
        assert_eq!(enter(&store, None).unwrap(), Navigation::Proceed);
    }

    #[test]
    fn test_login_view_redirects_when_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir, Some("tok"));

        assert_eq!(
            enter(&store, Some(Route::Login)).unwrap(),
            Navigation::Redirect(Route::Game)
        );
        assert_eq!(
            enter(&store, Some(Route::Register)).unwrap(),
            Navigation::Redirect(Route::Game)
        );
        assert_eq!(enter(&store, Some(Route::Wallet)).unwrap(), Navigation::Proceed);
    }
}
