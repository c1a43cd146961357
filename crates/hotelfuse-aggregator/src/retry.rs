//! Retry with exponential backoff and jitter.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries it
//! while the supplied classifier marks the error as transient. The policy is
//! independent of the error type, so the same helper can wrap HTTP fetches
//! or anything else with a retriable/fatal distinction.

use std::future::Future;
use std::time::Duration;

/// How many extra attempts to make and how long to wait between them.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure. `0` disables retries.
    pub max_retries: u32,
    /// Base delay for exponential backoff: the wait before retry `n`
    /// (1-indexed) is `backoff_base_ms * 2^(n-1)`, jittered by ±25%.
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // 3 total attempts, 1s/2s waits between them.
        Self {
            max_retries: 2,
            backoff_base_ms: 1_000,
        }
    }
}

/// Runs `operation` with up to `policy.max_retries` additional attempts on
/// errors the `is_retriable` classifier accepts.
///
/// Backoff schedule with `backoff_base_ms = 1_000`:
///
/// | Retry | Sleep before it          |
/// |-------|--------------------------|
/// | 1     | 1 000 ms × 2⁰ ± 25 %    |
/// | 2     | 1 000 ms × 2¹ ± 25 %    |
/// | 3     | 1 000 ms × 2² ± 25 %    |
///
/// Delay is capped at 60 s. Non-retriable errors are returned immediately
/// without sleeping. Attempts within one call are strictly sequential.
pub async fn retry_with_backoff<T, E, F, Fut, C>(
    policy: RetryPolicy,
    is_retriable: C,
    mut operation: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> bool,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = policy
                    .backoff_base_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                // ±25% uniform jitter so concurrent suppliers don't retry in
                // lockstep.
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "transient supplier error, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
