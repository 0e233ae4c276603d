//! Tests for the fetch/mutation error policy
//!
//! Validates the read retry budget and the mutation-to-toast routing
//! without touching the network: operations are closures over counters.

use std::cell::Cell;

use futures::executor::block_on;
use reqwest::StatusCode;
use yewdux::Dispatch;

use super::{QueryState, run_mutation, run_read};
use crate::error::{ApiError, ErrorCode};
use crate::stores::ToastStore;

fn server_error() -> ApiError {
    ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: None,
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status {
        status: StatusCode::UNAUTHORIZED,
        body: None,
    }
}

/// Tests that a read succeeding on the first try is not retried
#[test]
fn test_read_success_is_not_retried() {
    let calls = Cell::new(0u32);
    let state = block_on(run_read(|| {
        calls.set(calls.get() + 1);
        async { Ok::<_, ApiError>(42) }
    }));
    assert_eq!(state, QueryState::Ready(42));
    assert_eq!(calls.get(), 1);
}

/// Tests that one failure is absorbed by the retry
#[test]
fn test_read_retries_once_then_succeeds() {
    let calls = Cell::new(0u32);
    let state = block_on(run_read(|| {
        let attempt = calls.get();
        calls.set(attempt + 1);
        async move {
            if attempt == 0 {
                Err(server_error())
            } else {
                Ok("teams")
            }
        }
    }));
    assert_eq!(state, QueryState::Ready("teams"));
    assert_eq!(calls.get(), 2);
}

/// Tests that a read fails after exactly two attempts, resolved for the fallback
#[test]
fn test_read_escalates_after_second_failure() {
    let calls = Cell::new(0u32);
    let state: QueryState<()> = block_on(run_read(|| {
        calls.set(calls.get() + 1);
        async { Err(server_error()) }
    }));
    assert_eq!(calls.get(), 2);
    match state {
        QueryState::Failed(display) => {
            assert_eq!(display.code, ErrorCode::ServerError);
            assert!(!display.require_login);
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

/// Tests that a failed mutation opens the toast and is not retried
#[test]
fn test_mutation_failure_lands_in_toast() {
    let cx = yewdux::Context::new();
    let toasts = Dispatch::<ToastStore>::new(&cx);

    let result: Option<()> = block_on(run_mutation(&toasts, async { Err(unauthorized()) }));

    assert!(result.is_none());
    let toast = toasts.get();
    assert!(toast.is_open);
    assert_eq!(toast.message, "Your session has expired. Please sign in again.");
}

/// Tests that a successful mutation leaves the toast closed
#[test]
fn test_mutation_success_leaves_toast_closed() {
    let cx = yewdux::Context::new();
    let toasts = Dispatch::<ToastStore>::new(&cx);

    let result = block_on(run_mutation(&toasts, async { Ok::<_, ApiError>(7) }));

    assert_eq!(result, Some(7));
    assert!(!toasts.get().is_open);
}
