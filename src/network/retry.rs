//! Retry logic with exponential backoff for artifact store calls

use anyhow::Result;
use std::time::Duration;
use tracing::warn;

use crate::errors::{CleanerError, CleanerResult};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub exponential_base: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 250,
            max_delay_ms: 5000,
            exponential_base: 2.0,
        }
    }
}

impl RetryPolicy {
    fn next_delay(&self, current_ms: u64) -> u64 {
        let mut delay = (current_ms as f64 * self.exponential_base) as u64;
        delay = delay.min(self.max_delay_ms);
        let jitter = (delay as f64 * 0.1 * (rand::random::<f64>() - 0.5)) as u64;
        delay.saturating_add(jitter)
    }
}

pub async fn retry_with_backoff<F, Fut, T>(
    operation: F,
    policy: &RetryPolicy,
    context: &str,
) -> CleanerResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;
    let mut delay = policy.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= policy.max_attempts => {
                return Err(CleanerError::Network {
                    message: format!("{} failed after {} attempts", context, attempt),
                    source: Some(e),
                    retry_count: attempt,
                });
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} failed for {}: {}. Retrying in {}ms...",
                    attempt, policy.max_attempts, context, e, delay
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay = policy.next_delay(delay);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn returns_first_success() {
        let policy = RetryPolicy::default();
        let result = retry_with_backoff(|| async { Ok(42u32) }, &policy, "noop").await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn retries_until_success() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_attempts: 3,
            initial_delay_ms: 1,
            max_delay_ms: 2,
            exponential_base: 2.0,
        };

        let result = retry_with_backoff(
            || async {
                if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(anyhow::anyhow!("transient"))
                } else {
                    Ok("done")
                }
            },
            &policy,
            "flaky op",
        )
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let policy = RetryPolicy {
            max_attempts: 2,
            initial_delay_ms: 1,
            max_delay_ms: 2,
            exponential_base: 2.0,
        };

        let result: CleanerResult<()> = retry_with_backoff(
            || async { Err(anyhow::anyhow!("always down")) },
            &policy,
            "doomed op",
        )
        .await;

        match result.unwrap_err() {
            CleanerError::Network { retry_count, .. } => assert_eq!(retry_count, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
