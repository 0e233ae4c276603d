use serde::{Deserialize, Serialize};

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,
    /// The user's password.
    pub password: String,
}

/// Access/refresh token pair answered by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived token attached to authenticated requests.
    pub access_token: String,
    /// Long-lived token used to mint a new access token.
    pub refresh_token: String,
}

/// Request to exchange a refresh token for a fresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The refresh token previously issued at login.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Token fields use the camelCase names the API and local storage share
    #[test]
    fn test_token_pair_field_names() {
        let pair = TokenPair {
            access_token: "abc".to_string(),
            refresh_token: "def".to_string(),
        };
        let json = serde_json::to_string(&pair).expect("serialize token pair");
        assert!(json.contains("\"accessToken\":\"abc\""));
        assert!(json.contains("\"refreshToken\":\"def\""));
    }

    #[test]
    fn test_token_pair_roundtrip_from_server_payload() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"accessToken":"a1","refreshToken":"r1"}"#)
                .expect("valid token pair");
        assert_eq!(pair.access_token, "a1");
        assert_eq!(pair.refresh_token, "r1");
    }
}
