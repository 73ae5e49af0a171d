//! # Client Error Normalization
//!
//! Every HTTP exchange with the backend ends up in one of two shapes: an
//! [`ApiResponse`] whose `success` flag is set, or a [`ClientError`]. The
//! [`normalize`] function is the single place where that decision is made so
//! the terminal and the browser client show the same messages and run the same
//! session recovery.
//!
//! ## Policy
//!
//! | Status | Body | Outcome |
//! |--------|------|---------|
//! | 2xx | `success: true` | `Ok(envelope)` |
//! | 2xx | `success: false` | [`ClientError::Rejected`] with the body message (or `"Error"`) |
//! | 401 | any | [`ClientError::Unauthorized`], drop the token |
//! | 403 | any | [`ClientError::Forbidden`], drop token and username |
//! | other | any | [`ClientError::Http`] with the body message, or a generic status line |
//!
//! Both 401 and 403 send the user back to the login route.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::ApiResponse;

/// Shown when the backend answers 401.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again";
/// Shown when the backend answers 403.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied, please log in again";

const DEFAULT_REJECTION_MESSAGE: &str = "Error";

/// Normalized failure of an API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// 401: the token is missing, expired or revoked.
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    Unauthorized,

    /// 403: the token was refused for this resource.
    #[error("{}", ACCESS_DENIED_MESSAGE)]
    Forbidden,

    /// 2xx response whose envelope reports `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Any other non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input rejected locally before a request was sent.
    #[error("{0}")]
    Validation(String),
}

/// Which parts of the stored session a failed call invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionReset {
    /// Forget the token, keep the remembered username.
    Token,
    /// Forget the token and the username.
    Full,
}

impl ClientError {
    /// Session recovery required by this error, if any.
    pub fn session_reset(&self) -> Option<SessionReset> {
        match self {
            ClientError::Unauthorized => Some(SessionReset::Token),
            ClientError::Forbidden => Some(SessionReset::Full),
            _ => None,
        }
    }

    /// HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized => Some(401),
            ClientError::Forbidden => Some(403),
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the user has to log in again.
    pub fn requires_login(&self) -> bool {
        self.session_reset().is_some()
    }
}

/// Apply the response policy to a raw HTTP status and body.
pub fn normalize<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<T>, ClientError> {
    if (200..300).contains(&status) {
        let envelope: ApiResponse<T> =
            serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

        if !envelope.success {
            let message = match envelope.message() {
                "" => DEFAULT_REJECTION_MESSAGE.to_string(),
                message => message.to_string(),
            };
            return Err(ClientError::Rejected(message));
        }
        return Ok(envelope);
    }

    match status {
        401 => Err(ClientError::Unauthorized),
        403 => Err(ClientError::Forbidden),
        _ => Err(ClientError::Http {
            status,
            message: body_message(body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status)),
        }),
    }
}

/// Extract the `message` field of an error body, if it has a usable one.
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::BalanceResponse;

    #[test]
    fn test_success_envelope_passes_through() {
        let body = r#"{"success":true,"message":null,"data":{"username":"alice","balance":12.5}}"#;
        let envelope = normalize::<BalanceResponse>(200, body).unwrap();
        assert_eq!(envelope.into_data().unwrap().balance, 12.5);
    }

    #[test]
    fn test_unsuccessful_envelope_is_rejected() {
        let body = r#"{"success":false,"message":"Insufficient balance","data":null}"#;
        let err = normalize::<BalanceResponse>(200, body).unwrap_err();
        assert_eq!(err, ClientError::Rejected("Insufficient balance".to_string()));
        assert_eq!(err.session_reset(), None);
    }

    #[test]
    fn test_unsuccessful_envelope_without_message() {
        let body = r#"{"success":false}"#;
        let err = normalize::<()>(200, body).unwrap_err();
        assert_eq!(err.to_string(), "Error");
    }

    #[test]
    fn test_unauthorized_drops_token_only() {
        let err = normalize::<()>(401, "").unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);
        assert_eq!(err.session_reset(), Some(SessionReset::Token));
        assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_forbidden_drops_everything() {
        let err = normalize::<()>(403, r#"{"message":"nope"}"#).unwrap_err();
        assert_eq!(err, ClientError::Forbidden);
        assert_eq!(err.session_reset(), Some(SessionReset::Full));
        assert!(err.requires_login());
    }

    #[test]
    fn test_error_body_message_is_surfaced() {
        let body = r#"{"success":false,"message":"Too many requests. Please try again later.","data":null}"#;
        let err = normalize::<()>(429, body).unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "Too many requests. Please try again later.");
    }

    #[test]
    fn test_error_without_body_message() {
        let err = normalize::<()>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = normalize::<BalanceResponse>(200, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
