//! Bounded retries around fallible cloud SDK calls.
//!
//! An [`Invoker`] holds an ordered list of [`Catcher`] policies. When an
//! operation fails, the first catcher whose reason matches the error decides
//! what happens next: retry after its wait while its budget lasts, or give up
//! with [`InvokeError::RetryTimeout`]. Failures no catcher recognizes are
//! returned unchanged after a single attempt.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::catcher::Catcher;
use crate::classify::{ErrorClassifier, ReasonMatcher};
use crate::error::InvokeError;

/// Blocks the current thread between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Clone)]
pub struct Invoker {
    catchers: Vec<Catcher>,
    classifier: Arc<dyn ErrorClassifier>,
    custom_classifier: bool,
    deadline: Option<Duration>,
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("catchers", &self.catchers)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new()
    }
}

impl Invoker {
    /// Invoker preloaded with the client-failure, service-busy and throttling
    /// catchers, in that order.
    pub fn new() -> Self {
        let mut invoker = Self::empty();
        invoker.add_catcher(Catcher::client_error());
        invoker.add_catcher(Catcher::service_busy());
        invoker.add_catcher(Catcher::throttling());
        invoker
    }

    pub fn empty() -> Self {
        Self {
            catchers: Vec::new(),
            classifier: Arc::new(ReasonMatcher),
            custom_classifier: false,
            deadline: None,
        }
    }

    /// Appends `catcher`. Catchers are consulted in insertion order, so a
    /// catcher added after a more generic one that shadows it is never used.
    /// Shadowing is only reported for the default [`ReasonMatcher`].
    pub fn add_catcher(&mut self, catcher: Catcher) {
        let shadowing = if self.custom_classifier {
            None
        } else {
            self.catchers.iter().find(|c| c.shadows(&catcher))
        };
        if let Some(earlier) = shadowing {
            warn!(
                reason = %catcher.reason,
                shadowed_by = %earlier.reason,
                "catcher is shadowed by an earlier catcher and will never match"
            );
        }
        self.catchers.push(catcher);
    }

    pub fn with_catcher(mut self, catcher: Catcher) -> Self {
        self.add_catcher(catcher);
        self
    }

    pub fn with_classifier(mut self, classifier: impl ErrorClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self.custom_classifier = true;
        self
    }

    /// Bounds the total time spent across attempts and waits.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn catchers(&self) -> &[Catcher] {
        &self.catchers
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Runs `op` until it succeeds or a terminal error is reached, blocking the
    /// thread between attempts.
    pub fn run<T, F>(&self, op: F) -> Result<T, InvokeError>
    where
        F: FnMut() -> anyhow::Result<T>,
    {
        self.run_with(&ThreadSleeper, op)
    }

    pub fn run_with<T, F, S>(&self, sleeper: &S, mut op: F) -> Result<T, InvokeError>
    where
        F: FnMut() -> anyhow::Result<T>,
        S: Sleeper + ?Sized,
    {
        let mut run = RunState::new(self);

        loop {
            let err = match op() {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let wait = run.on_failure(err)?;
            sleeper.sleep(wait);
        }
    }

    /// Async variant of [`Invoker::run`]; waits with `tokio::time::sleep`.
    pub async fn run_async<T, F, Fut>(&self, mut op: F) -> Result<T, InvokeError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let mut run = RunState::new(self);

        loop {
            let err = match op().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let wait = run.on_failure(err)?;
            tokio::time::sleep(wait).await;
        }
    }
}

/// Bookkeeping owned by a single run: remaining budget per catcher, attempt
/// count and start time.
struct RunState<'a> {
    invoker: &'a Invoker,
    remaining: Vec<u32>,
    attempts: u32,
    started: Instant,
}

impl<'a> RunState<'a> {
    fn new(invoker: &'a Invoker) -> Self {
        Self {
            invoker,
            remaining: invoker.catchers.iter().map(|c| c.retry_count).collect(),
            attempts: 0,
            started: Instant::now(),
        }
    }

    /// Records a failed attempt and returns how long to wait before the next
    /// one, or the terminal error.
    fn on_failure(&mut self, err: anyhow::Error) -> Result<Duration, InvokeError> {
        self.attempts = self.attempts.saturating_add(1);

        let Some(index) = self.matching_catcher(&err) else {
            debug!(attempt = self.attempts, error = %err, "error is not retryable");
            return Err(InvokeError::Operation(err));
        };
        let catcher = &self.invoker.catchers[index];

        if self.remaining[index] == 0 {
            warn!(
                reason = %catcher.reason,
                attempts = self.attempts,
                error = %err,
                "retry budget exhausted"
            );
            return Err(InvokeError::RetryTimeout {
                reason: catcher.reason.clone(),
                attempts: self.attempts,
                source: err,
            });
        }
        self.remaining[index] -= 1;

        if let Some(deadline) = self.invoker.deadline {
            if self.started.elapsed().saturating_add(catcher.retry_wait) > deadline {
                warn!(
                    reason = %catcher.reason,
                    attempts = self.attempts,
                    deadline_ms = deadline.as_millis(),
                    "retry would overrun deadline"
                );
                return Err(InvokeError::DeadlineExceeded {
                    deadline,
                    attempts: self.attempts,
                    source: err,
                });
            }
        }

        debug!(
            reason = %catcher.reason,
            attempt = self.attempts,
            remaining = self.remaining[index],
            wait_ms = catcher.retry_wait.as_millis(),
            error = %err,
            "transient error; retrying"
        );

        Ok(catcher.retry_wait)
    }

    fn matching_catcher(&self, err: &anyhow::Error) -> Option<usize> {
        self.invoker
            .catchers
            .iter()
            .position(|c| self.invoker.classifier.matches(err, &[c.reason.as_str()]))
    }
}
