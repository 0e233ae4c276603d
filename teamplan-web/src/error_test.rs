//! Tests for error classification
//!
//! Validates that every API failure shape resolves to a display triple
//! without panicking, and that session-related failures are the only
//! ones that demand a fresh login.

use super::{ApiError, ErrorCode, resolve};
use reqwest::StatusCode;
use shared::models::ErrorBody;

fn status_error(status: StatusCode, body: Option<ErrorBody>) -> ApiError {
    ApiError::Status { status, body }
}

/// A reqwest error built without any network I/O.
fn transport_error() -> ApiError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("invalid URL must fail to build");
    ApiError::Network(err)
}

/// Tests that a 401 resolves to the login-required triple
#[test]
fn test_unauthorized_status_requires_login() {
    let display = resolve(&status_error(StatusCode::UNAUTHORIZED, None));
    assert_eq!(display.code, ErrorCode::AuthRequired);
    assert!(display.require_login);
    assert!(!display.message.is_empty());
}

/// Tests that auth body codes require login even on a non-401 status
#[test]
fn test_auth_body_codes_require_login() {
    for code in ["UNAUTHORIZED", "EXPIRED_TOKEN", "INVALID_TOKEN"] {
        let body = ErrorBody::with_code(code, "denied");
        let display = resolve(&status_error(StatusCode::BAD_REQUEST, Some(body)));
        assert_eq!(display.code, ErrorCode::AuthRequired, "code {code}");
        assert!(display.require_login, "code {code}");
    }
}

/// Tests the forbidden/not-found/server buckets
#[test]
fn test_status_buckets() {
    let forbidden = resolve(&status_error(StatusCode::FORBIDDEN, None));
    assert_eq!(forbidden.code, ErrorCode::Forbidden);
    assert!(!forbidden.require_login);

    let missing = resolve(&status_error(StatusCode::NOT_FOUND, None));
    assert_eq!(missing.code, ErrorCode::NotFound);

    let broken = resolve(&status_error(StatusCode::INTERNAL_SERVER_ERROR, None));
    assert_eq!(broken.code, ErrorCode::ServerError);

    let flaky = resolve(&status_error(StatusCode::SERVICE_UNAVAILABLE, None));
    assert_eq!(flaky.code, ErrorCode::ServerError);
}

/// Tests that transport failures classify as network trouble
#[test]
fn test_transport_error_is_network() {
    let display = resolve(&transport_error());
    assert_eq!(display.code, ErrorCode::Network);
    assert!(!display.require_login);
}

/// Tests the generic fallback for statuses the client does not recognize
#[test]
fn test_unrecognized_status_falls_back() {
    let display = resolve(&status_error(StatusCode::IM_A_TEAPOT, None));
    assert_eq!(display.code, ErrorCode::Unknown);
    assert!(!display.require_login);
    assert!(!display.message.is_empty());
}

/// Tests that the server's own message is preferred for plain 4xx bodies
#[test]
fn test_server_message_preferred_when_present() {
    let body = ErrorBody::new("Title must not be blank");
    let display = resolve(&status_error(StatusCode::UNPROCESSABLE_ENTITY, Some(body)));
    assert_eq!(display.code, ErrorCode::Unknown);
    assert_eq!(display.message, "Title must not be blank");

    let blank = ErrorBody::new("");
    let display = resolve(&status_error(StatusCode::UNPROCESSABLE_ENTITY, Some(blank)));
    assert!(!display.message.is_empty());
}

/// Tests the code's display form used in logs
#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::AuthRequired.to_string(), "AUTH_REQUIRED");
    assert_eq!(ErrorCode::ServerError.to_string(), "SERVER_ERROR");
}
