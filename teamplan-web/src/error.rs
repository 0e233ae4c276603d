#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use reqwest::StatusCode;
use shared::models::ErrorBody;
use strum_macros::Display;

/// Body codes the server uses for a missing or expired session.
const AUTH_BODY_CODES: [&str; 3] = ["UNAUTHORIZED", "EXPIRED_TOKEN", "INVALID_TOKEN"];

const AUTH_MESSAGE: &str = "Your session has expired. Please sign in again.";
const FORBIDDEN_MESSAGE: &str = "You do not have permission to do that.";
const NOT_FOUND_MESSAGE: &str = "We could not find what you were looking for.";
const SERVER_MESSAGE: &str = "Something went wrong on our end. Please try again.";
const NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client-wide error for API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection, request build, body decode.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-success HTTP response, with the parsed body when the server
    /// sent one.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Parsed error body, when present and well-formed.
        body: Option<ErrorBody>,
    },
}

/// Classified error category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The session is missing or expired; the user must sign in.
    AuthRequired,
    /// Authenticated but not allowed.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The server failed.
    ServerError,
    /// The server could not be reached at all.
    Network,
    /// Anything the client does not recognize.
    Unknown,
}

/// What the UI shows for a failure: a code, a display message, and
/// whether the user has to sign in again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplayData {
    /// Classified category.
    pub code: ErrorCode,
    /// Message shown in the toast or the full-page fallback.
    pub message: String,
    /// Whether the recovery action is the login page.
    pub require_login: bool,
}

impl ErrorDisplayData {
    fn new(code: ErrorCode, message: impl Into<String>, require_login: bool) -> Self {
        Self {
            code,
            message: message.into(),
            require_login,
        }
    }
}

/// Map any API failure to the triple shown to the user.
///
/// Total over every error shape: unrecognized failures fall back to a
/// generic message with `require_login` false.
#[must_use]
pub fn resolve(error: &ApiError) -> ErrorDisplayData {
    match error {
        ApiError::Network(_) => ErrorDisplayData::new(ErrorCode::Network, NETWORK_MESSAGE, false),
        ApiError::Status { status, body } => resolve_status(*status, body.as_ref()),
    }
}

fn resolve_status(status: StatusCode, body: Option<&ErrorBody>) -> ErrorDisplayData {
    let auth_coded = body
        .and_then(|body| body.code.as_deref())
        .is_some_and(|code| AUTH_BODY_CODES.contains(&code));
    if status == StatusCode::UNAUTHORIZED || auth_coded {
        return ErrorDisplayData::new(ErrorCode::AuthRequired, AUTH_MESSAGE, true);
    }

    match status {
        StatusCode::FORBIDDEN => ErrorDisplayData::new(ErrorCode::Forbidden, FORBIDDEN_MESSAGE, false),
        StatusCode::NOT_FOUND => ErrorDisplayData::new(ErrorCode::NotFound, NOT_FOUND_MESSAGE, false),
        status if status.is_server_error() => {
            ErrorDisplayData::new(ErrorCode::ServerError, SERVER_MESSAGE, false)
        }
        _ => {
            // Prefer the server's own wording for uncategorized 4xx.
            let message = body
                .map(|body| body.message.clone())
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_MESSAGE.to_string());
            ErrorDisplayData::new(ErrorCode::Unknown, message, false)
        }
    }
}
