//! Retry policies consulted by an [`Invoker`](crate::retry::Invoker).

use std::time::Duration;

use crate::provider::{CLIENT_FAILURE, SERVICE_UNAVAILABLE, THROTTLING};

/// A transient-error policy: which failures to retry, how many times, and how
/// long to wait between attempts.
///
/// A catcher is never mutated by a run. Each run keeps its own remaining
/// budget per catcher, so one catcher can back any number of invokers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catcher {
    pub reason: String,
    pub retry_count: u32,
    pub retry_wait: Duration,
}

impl Catcher {
    pub fn new(reason: impl Into<String>, retry_count: u32, retry_wait_seconds: u64) -> Self {
        Self {
            reason: reason.into(),
            retry_count,
            retry_wait: Duration::from_secs(retry_wait_seconds),
        }
    }

    pub fn with_wait(reason: impl Into<String>, retry_count: u32, retry_wait: Duration) -> Self {
        Self {
            reason: reason.into(),
            retry_count,
            retry_wait,
        }
    }

    pub fn client_error() -> Self {
        Self::new(CLIENT_FAILURE, 10, 5)
    }

    pub fn service_busy() -> Self {
        Self::new(SERVICE_UNAVAILABLE, 10, 5)
    }

    pub fn throttling() -> Self {
        Self::new(THROTTLING, 10, 10)
    }

    /// True when, under reason matching, every failure `other` would catch is
    /// already caught by `self`: the reasons are equal or `other` is a dotted
    /// sub-code of `self` (`Throttling` shadows `Throttling.User`).
    pub fn shadows(&self, other: &Catcher) -> bool {
        if self.reason.is_empty() {
            return false;
        }

        other.reason == self.reason
            || other
                .reason
                .strip_prefix(self.reason.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }
}
