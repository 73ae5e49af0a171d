use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Authentication payload (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_format() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{"token":"eyJ.abc","username":"alice","balance":1000.50}"#,
        )
        .unwrap();
        assert_eq!(auth.token, "eyJ.abc");
        assert_eq!(auth.username, "alice");
        assert_eq!(auth.balance, 1000.5);
    }
}
