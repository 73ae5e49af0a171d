//! # User Store
//!
//! Reactive player session. Token and username are restored from
//! `localStorage` at startup and written back on every change; the balance
//! lives in memory and is refreshed from the server.
//!
//! The async actions report success as `bool`: failures have already been
//! shown to the player as a toast by the HTTP layer.

use leptos::prelude::*;
use shared::{
    validate_credentials, ApiResponse, AuthResponse, LoginRequest, RegisterRequest, SessionReset,
    SessionStore,
};

use crate::api;
use crate::services::http::Api;
use crate::state::storage::{LocalStorage, StorageError};
use crate::state::toast::ToastContext;

/// Global user context
#[derive(Clone, Copy)]
pub struct UserContext {
    session: RwSignal<SessionStore<LocalStorage>>,
    pub toasts: ToastContext,
}

impl UserContext {
    pub fn new(toasts: ToastContext) -> Self {
        let store = SessionStore::load(LocalStorage).unwrap_or_else(|e| {
            log::warn!("Failed to restore session: {}", e);
            SessionStore::empty(LocalStorage)
        });
        Self {
            session: RwSignal::new(store),
            toasts,
        }
    }

    /// HTTP client bound to this session.
    pub fn api(&self) -> Api {
        Api::new(*self)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|store| store.is_logged_in())
    }

    pub fn username(&self) -> String {
        self.session.with(|store| store.username().to_string())
    }

    pub fn balance(&self) -> f64 {
        self.session.with(|store| store.balance())
    }

    /// Current token, read without subscribing.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|store| store.token().map(str::to_string))
    }

    pub fn set_token(&self, token: &str) {
        self.persist(|store| store.set_token(token));
    }

    pub fn set_user_info(&self, username: &str, balance: f64) {
        self.persist(|store| store.set_user_info(username, balance));
    }

    /// Mirror a balance reported by a spin or wallet response.
    pub fn set_balance(&self, balance: f64) {
        self.session.update(|store| store.set_balance(balance));
    }

    pub fn clear_user_info(&self) {
        self.persist(|store| store.clear());
    }

    /// Drop credentials the server refused.
    pub fn reset(&self, reset: SessionReset) {
        self.persist(|store| store.reset(reset));
    }

    pub async fn do_login(&self, request: LoginRequest) -> bool {
        if let Err(e) = validate_credentials(&request.username, &request.password) {
            self.toasts.error(e.to_string());
            return false;
        }

        match api::auth::login(&self.api(), &request).await {
            Ok(ApiResponse {
                data: Some(auth), ..
            }) => {
                self.apply_auth(&auth);
                self.toasts.success("Login successful!");
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::error!("Login error: {}", e);
                false
            }
        }
    }

    pub async fn do_register(&self, request: RegisterRequest) -> bool {
        if let Err(e) = validate_credentials(&request.username, &request.password) {
            self.toasts.error(e.to_string());
            return false;
        }

        match api::auth::register(&self.api(), &request).await {
            Ok(ApiResponse {
                data: Some(auth), ..
            }) => {
                self.apply_auth(&auth);
                self.toasts.success("Registration successful!");
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::error!("Register error: {}", e);
                false
            }
        }
    }

    /// The local session is cleared even when the server call fails.
    pub async fn do_logout(&self) -> bool {
        let result = api::auth::logout(&self.api()).await;
        self.clear_user_info();
        match result {
            Ok(_) => {
                self.toasts.success("Logged out");
                true
            }
            Err(e) => {
                log::error!("Logout error: {}", e);
                self.toasts.info("Logged out locally");
                false
            }
        }
    }

    /// Refresh the balance; failures are logged and leave it unchanged.
    pub async fn update_balance(&self) {
        match api::game::get_balance(&self.api()).await {
            Ok(ApiResponse {
                data: Some(balance), ..
            }) => self.set_balance(balance.balance),
            Ok(_) => {}
            Err(e) => log::error!("Update balance error: {}", e),
        }
    }

    fn apply_auth(&self, auth: &AuthResponse) {
        self.persist(|store| store.apply_auth(auth));
    }

    fn persist<F>(&self, change: F)
    where
        F: FnOnce(&mut SessionStore<LocalStorage>) -> Result<(), StorageError>,
    {
        self.session.update(|store| {
            if let Err(e) = change(store) {
                log::warn!("Failed to persist session: {}", e);
            }
        });
    }
}

pub fn provide_user_context(toasts: ToastContext) -> UserContext {
    let context = UserContext::new(toasts);
    provide_context(context);
    context
}

pub fn use_user_context() -> UserContext {
    expect_context::<UserContext>()
}
