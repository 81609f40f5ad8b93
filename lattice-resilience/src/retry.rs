//! Generic retry executor with exponential backoff and jitter.

use std::time::Duration;

use rand::Rng;
use tracing::warn;

use lattice_core::config::RetryConfig;
use lattice_core::errors::{LatticeError, LatticeResult};

/// Bounded backoff policy.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts = max_retries + 1.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: lattice_core::constants::DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Backoff before the given 1-based retry: `initial * 2^(attempt-1)`,
    /// capped at `max_delay`, plus up to 25% additive jitter.
    fn delay_for(&self, attempt: u32) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(16);
        let exponential = self.initial_delay.saturating_mul(1u32 << shift);
        let capped = exponential.min(self.max_delay);
        let jitter_ceiling = (capped.as_millis() as u64 / 4).max(1);
        let jitter = rand::thread_rng().gen_range(0..jitter_ceiling);
        capped + Duration::from_millis(jitter)
    }
}

/// Observer invoked before each retry with the 1-based attempt number and
/// the error that triggered it.
pub type RetryObserver<'a> = dyn FnMut(u32, &LatticeError) + 'a;

/// Run `op`, retrying transient failures with exponential backoff.
///
/// Errors whose [`LatticeError::is_retryable`] is false are returned
/// immediately without a single retry. After `max_retries` failed retries
/// the last error is returned.
pub fn execute_with_retry<T, F>(
    policy: &RetryPolicy,
    mut observer: Option<&mut RetryObserver<'_>>,
    mut op: F,
) -> LatticeResult<T>
where
    F: FnMut() -> LatticeResult<T>,
{
    let mut attempt: u32 = 0;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_retryable() => return Err(err),
            Err(err) => {
                attempt += 1;
                if attempt > policy.max_retries {
                    return Err(err);
                }
                if let Some(cb) = observer.as_deref_mut() {
                    cb(attempt, &err);
                }
                warn!(attempt, code = err.code(), error = %err, "retrying transient failure");
                std::thread::sleep(policy.delay_for(attempt));
            }
        }
    }
}
