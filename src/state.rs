//! Configuration handed to the host's state-convergence poller.
//!
//! The poller itself lives in the host. It calls `refresh` until the reported
//! status is in `target`, leaves `pending` (an error), or `timeout` elapses.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Floor on the interval between two refresh calls.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Reads the current status of a resource. `Ok(None)` means the resource
/// does not exist (yet).
pub type RefreshFunc = Arc<dyn Fn() -> anyhow::Result<Option<String>> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Target,
    Pending,
    Unexpected,
}

#[derive(Clone)]
pub struct StateChangeConf {
    pub pending: Vec<String>,
    pub target: Vec<String>,
    pub refresh: RefreshFunc,
    pub timeout: Duration,
    pub delay: Duration,
    pub min_timeout: Duration,
}

impl fmt::Debug for StateChangeConf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateChangeConf")
            .field("pending", &self.pending)
            .field("target", &self.target)
            .field("timeout", &self.timeout)
            .field("delay", &self.delay)
            .field("min_timeout", &self.min_timeout)
            .finish_non_exhaustive()
    }
}

impl StateChangeConf {
    pub fn classify(&self, status: &str) -> StatusClass {
        if self.target.iter().any(|s| s == status) {
            StatusClass::Target
        } else if self.pending.iter().any(|s| s == status) {
            StatusClass::Pending
        } else {
            StatusClass::Unexpected
        }
    }

    pub fn refresh_status(&self) -> anyhow::Result<Option<String>> {
        (self.refresh)()
    }
}

pub fn build_state_conf<P, T>(
    pending: P,
    target: T,
    timeout: Duration,
    delay: Duration,
    refresh: RefreshFunc,
) -> StateChangeConf
where
    P: IntoIterator,
    P::Item: Into<String>,
    T: IntoIterator,
    T::Item: Into<String>,
{
    StateChangeConf {
        pending: pending.into_iter().map(Into::into).collect(),
        target: target.into_iter().map(Into::into).collect(),
        refresh,
        timeout,
        delay,
        min_timeout: MIN_POLL_INTERVAL,
    }
}
