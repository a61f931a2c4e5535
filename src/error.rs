//! Configuration and invocation errors.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` out of range: got {actual}, expected {min}..={max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },
    #[error("`{field}` cannot be empty")]
    Empty { field: &'static str },
}

/// Terminal outcome of an [`Invoker`](crate::retry::Invoker) run.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The failure matched no catcher and is returned untouched.
    #[error(transparent)]
    Operation(anyhow::Error),
    #[error("retry timeout for `{reason}` after {attempts} attempt(s)")]
    RetryTimeout {
        reason: String,
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },
    #[error("deadline of {deadline:?} exceeded after {attempts} attempt(s)")]
    DeadlineExceeded {
        deadline: Duration,
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },
}

impl InvokeError {
    /// The error returned by the last attempt.
    pub fn last_error(&self) -> &anyhow::Error {
        match self {
            Self::Operation(err)
            | Self::RetryTimeout { source: err, .. }
            | Self::DeadlineExceeded { source: err, .. } => err,
        }
    }

    pub fn into_inner(self) -> anyhow::Error {
        match self {
            Self::Operation(err)
            | Self::RetryTimeout { source: err, .. }
            | Self::DeadlineExceeded { source: err, .. } => err,
        }
    }

    pub fn is_retry_timeout(&self) -> bool {
        matches!(self, Self::RetryTimeout { .. })
    }
}
