//! Bounded retry with linear backoff.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// How many times to try an operation and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Never less than 1.
    pub max_attempts: u32,
    /// Attempt `n` (1-based) is followed by a `n * backoff_step` pause.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200))
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_step,
        }
    }

    /// Pause after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

/// Run `op` until it succeeds or the policy runs out of attempts.
///
/// `op` receives the 1-based attempt number. Returns the last error when
/// every attempt fails. No pause follows the final attempt.
pub async fn retry_async<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("attempt {attempt}/{} failed: {e}", policy.max_attempts);
                if attempt >= policy.max_attempts {
                    return Err(e);
                }
                let delay = policy.delay_after(attempt);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
        }
    }
}
