//! Fixed-delay retry for a backend that sleeps when idle.
//!
//! The hosted backend can take tens of seconds to accept connections after a
//! period of inactivity. [`retry`] wraps any single-shot request and repeats it
//! with a constant pause until it succeeds, fails in a way the predicate does
//! not consider retryable, or the attempt ceiling is reached.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Attempt ceiling and pause between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first. Zero behaves as one.
    pub max_attempts: u32,
    /// Fixed delay between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 25,
            delay: Duration::from_millis(5000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// A single attempt with no waiting.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    fn ceiling(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Why [`retry`] gave up.
#[derive(Debug, PartialEq)]
pub enum Retried<E> {
    /// The predicate rejected the error on the given attempt.
    Aborted { attempt: u32, error: E },
    /// Every attempt failed with a retryable error.
    Exhausted { attempts: u32, last: E },
}

/// Run `op` until it succeeds, returns a non-retryable error, or the policy's
/// ceiling is reached. `op` receives the 1-based attempt number.
pub async fn retry<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    mut op: F,
    is_retryable: P,
) -> Result<T, Retried<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: Display,
{
    let ceiling = policy.ceiling();
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if !is_retryable(&error) => {
                return Err(Retried::Aborted { attempt, error });
            }
            Err(error) if attempt >= ceiling => {
                return Err(Retried::Exhausted {
                    attempts: attempt,
                    last: error,
                });
            }
            Err(error) => {
                tracing::debug!(attempt, ceiling, %error, "attempt failed, retrying");
                sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Platform sleep: tokio natively, browser timers on wasm.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
