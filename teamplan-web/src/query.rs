//! Error-propagation policy for data fetches and mutations.
//!
//! Reads fail loud: one automatic retry, then the resolved error is
//! handed to the page so it can swap in the full-page fallback. Writes
//! fail soft: no retry, the resolved message lands in the toast and the
//! page stays where it is.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::future::Future;

use yewdux::Dispatch;

use crate::error::{ApiError, ErrorDisplayData, resolve};
use crate::stores::ToastStore;

/// What a page renders for an in-flight or settled read.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// The fetch has not settled yet.
    Loading,
    /// The fetch succeeded.
    Ready(T),
    /// The fetch failed after its retry; render the fallback.
    Failed(ErrorDisplayData),
}

impl<T> QueryState<T> {
    /// Whether the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Run a read, retrying exactly once before escalating.
pub async fn run_read<T, F, Fut>(fetch: F) -> QueryState<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match fetch().await {
        Ok(value) => QueryState::Ready(value),
        Err(_first) => match fetch().await {
            Ok(value) => QueryState::Ready(value),
            Err(again) => QueryState::Failed(resolve(&again)),
        },
    }
}

/// Run a mutation. Failures are not retried and never escalate past the
/// toast; the caller gets `None` and the page keeps rendering.
pub async fn run_mutation<T>(
    toasts: &Dispatch<ToastStore>,
    op: impl Future<Output = Result<T, ApiError>>,
) -> Option<T> {
    match op.await {
        Ok(value) => Some(value),
        Err(error) => {
            let display = resolve(&error);
            toasts.reduce_mut(|toast| toast.show(display.message));
            None
        }
    }
}
