//! Linear backoff for hand-written wait loops that are not driven by an
//! [`Invoker`](crate::retry::Invoker).

use std::time::Duration;

use crate::retry::{Sleeper, ThreadSleeper};

/// Yields `first` on the first call and `(n - 1) * increase` on the n-th.
///
/// The counter only moves forward; build a new waiter to start over.
#[derive(Debug, Clone)]
pub struct IncrementalWait {
    first: Duration,
    increase: Duration,
    calls: u32,
}

impl IncrementalWait {
    pub fn new(first: Duration, increase: Duration) -> Self {
        Self {
            first,
            increase,
            calls: 1,
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        let delay = if self.calls == 1 {
            self.first
        } else {
            self.increase.saturating_mul(self.calls - 1)
        };
        self.calls = self.calls.saturating_add(1);
        delay
    }

    /// Number of waits handed out so far.
    pub fn waits(&self) -> u32 {
        self.calls - 1
    }

    pub fn wait(&mut self) {
        self.wait_with(&ThreadSleeper);
    }

    pub fn wait_with<S: Sleeper + ?Sized>(&mut self, sleeper: &S) {
        sleeper.sleep(self.next_delay());
    }

    pub async fn wait_async(&mut self) {
        tokio::time::sleep(self.next_delay()).await;
    }
}

/// Closure form of [`IncrementalWait`]: each call blocks for the next delay.
pub fn incremental_wait(first: Duration, increase: Duration) -> impl FnMut() {
    let mut waiter = IncrementalWait::new(first, increase);
    move || waiter.wait()
}
