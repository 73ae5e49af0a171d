//! HTTP client with request/response interception

use gloo_net::http::{Method, Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared::{error::normalize, ApiResponse, ClientError, Route};

use crate::state::user::UserContext;
use crate::utils::constants::API_BASE;

/// Result of one backend call: the success envelope or a normalized error.
pub type ApiResult<T> = Result<ApiResponse<T>, ClientError>;

/// Backend client bound to the user session.
#[derive(Clone, Copy)]
pub struct Api {
    user: UserContext,
}

impl Api {
    pub fn new(user: UserContext) -> Self {
        Self { user }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self
            .builder(Method::GET, path)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        self.execute(request).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self
            .builder(Method::POST, path)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        self.execute(request).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self
            .builder(Method::POST, path)
            .json(body)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        self.execute(request).await
    }

    /// Request under [`API_BASE`] with the session token attached.
    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(&format!("{}{}", API_BASE, path)).method(method);
        match self.user.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let result = match request.send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => normalize(status, &body),
                    Err(e) => Err(ClientError::Network(e.to_string())),
                }
            }
            Err(e) => Err(ClientError::Network(e.to_string())),
        };

        if let Err(err) = &result {
            self.on_error(err);
        }
        result
    }

    /// Toast the failure; on 401/403 also drop the session and go to login.
    fn on_error(&self, err: &ClientError) {
        log::error!("Response error: {}", err);
        self.user.toasts.error(err.to_string());

        if let Some(reset) = err.session_reset() {
            self.user.reset(reset);
            redirect_to_login();
        }
    }
}

/// Full page load of the login route, dropping all in-memory state.
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(Route::Login.path()) {
        log::warn!("Failed to redirect to login: {:?}", e);
    }
}
