//! # User Store
//!
//! Session lifecycle of the player: login, register, logout and balance
//! refresh. The token and username are persisted through the shared session;
//! the balance is kept in memory and follows the server.

use std::sync::Arc;

use shared::{
    validate_credentials, AuthResponse, LoginRequest, RegisterRequest, Session,
};

use crate::core::error::Result;
use crate::core::service::SlotApi;
use crate::services::session::SharedSession;

/// Player session plus the API used to change it.
#[derive(Clone)]
pub struct UserStore {
    api: Arc<dyn SlotApi>,
    session: SharedSession,
}

impl UserStore {
    pub fn new(api: Arc<dyn SlotApi>, session: SharedSession) -> Self {
        Self { api, session }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().session().clone()
    }

    /// Handle on the session, shared with the API client.
    pub fn shared(&self) -> &SharedSession {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    pub fn username(&self) -> String {
        self.session.read().username().to_string()
    }

    pub fn balance(&self) -> f64 {
        self.session.read().balance()
    }

    /// Log in and adopt the returned session.
    pub async fn do_login(&self, request: LoginRequest) -> Result<AuthResponse> {
        validate_credentials(&request.username, &request.password)?;
        let auth = self.api.login(request).await?.into_data()?;
        self.session.write().apply_auth(&auth)?;
        tracing::info!(username = %auth.username, "Logged in");
        Ok(auth)
    }

    /// Register and adopt the returned session.
    pub async fn do_register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        validate_credentials(&request.username, &request.password)?;
        let auth = self.api.register(request).await?.into_data()?;
        self.session.write().apply_auth(&auth)?;
        tracing::info!(username = %auth.username, "Registered");
        Ok(auth)
    }

    /// Log out server-side; the local session is cleared even when the call fails.
    pub async fn do_logout(&self) -> Result<()> {
        let result = self.api.logout().await;
        self.clear_user_info()?;
        match result {
            Ok(_) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Logout call failed, local session cleared anyway");
                Err(err.into())
            }
        }
    }

    /// Fetch the balance from the server and mirror it locally.
    pub async fn refresh_balance(&self) -> Result<f64> {
        let balance = self.api.get_balance().await?.into_data()?;
        self.set_balance(balance.balance);
        Ok(balance.balance)
    }

    /// Like [`refresh_balance`](Self::refresh_balance), but failures are only
    /// logged and leave the balance unchanged.
    pub async fn update_balance(&self) -> Option<f64> {
        match self.refresh_balance().await {
            Ok(balance) => Some(balance),
            Err(err) => {
                tracing::error!(error = %err, "Update balance error");
                None
            }
        }
    }

    /// Mirror a balance reported by a spin or wallet response.
    pub fn set_balance(&self, balance: f64) {
        self.session.write().set_balance(balance);
    }

    pub fn clear_user_info(&self) -> Result<()> {
        self.session.write().clear()?;
        Ok(())
    }
}
