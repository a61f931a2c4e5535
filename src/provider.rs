//! Errors reported by cloud SDK calls and the reason codes retried by default.

use thiserror::Error;

/// Generic failure raised by the SDK client itself (timeouts, broken connections).
pub const CLIENT_FAILURE: &str = "ClientFailure";
pub const SERVICE_UNAVAILABLE: &str = "ServiceUnavailable";
pub const THROTTLING: &str = "Throttling";

/// Error returned by a cloud SDK call, carrying the provider's error code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("[{code}] {message}{}", request_suffix(.request_id))]
pub struct ProviderError {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// True when `reason` names this error's code or one of its parents,
    /// e.g. `Throttling` for `Throttling.User`.
    pub fn code_matches(&self, reason: &str) -> bool {
        if reason.is_empty() {
            return false;
        }

        self.code == reason
            || self
                .code
                .strip_prefix(reason)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

fn request_suffix(request_id: &Option<String>) -> String {
    match request_id {
        Some(id) => format!(" (request id: {id})"),
        None => String::new(),
    }
}
