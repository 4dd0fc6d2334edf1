//! Retry policy for throttled (HTTP 429) requests

use std::time::Duration;

/// How the wait between retries grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `initial * 2^(attempt - 1)`
    Exponential,
    /// Always `initial`
    Fixed,
}

/// Retry budget applied when the API answers 429
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 5;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);
    pub const SINGLE_RETRY_PAUSE: Duration = Duration::from_secs(2);

    pub fn exponential(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
            backoff: Backoff::Exponential,
        }
    }

    /// One retry after a fixed pause, no further attempts
    pub fn single_retry(pause: Duration) -> Self {
        Self {
            max_retries: 1,
            initial_backoff: pause,
            backoff: Backoff::Fixed,
        }
    }

    /// Wait before retry number `attempt` (1-based), or `None` once the budget is spent
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_retries {
            return None;
        }
        match self.backoff {
            Backoff::Exponential => {
                let factor = 2u32.checked_pow(attempt - 1).unwrap_or(u32::MAX);
                Some(self.initial_backoff.saturating_mul(factor))
            }
            Backoff::Fixed => Some(self.initial_backoff),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_INITIAL_BACKOFF)
    }
}
