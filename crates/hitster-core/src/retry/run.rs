//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::error::HttpError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs a closure until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, label: &str, mut f: F) -> Result<T, HttpError>
where
    F: FnMut() -> Result<T, HttpError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(
                            "{} failed (attempt {}, {:?}): {}; retrying in {:?}",
                            label,
                            attempt,
                            kind,
                            e,
                            d
                        );
                        std::thread::sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::Backoff;
    use std::time::Duration;

    fn instant_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::ZERO,
            step_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff: Backoff::Linear,
        }
    }

    fn status(code: u32) -> HttpError {
        HttpError::Status {
            code,
            body: String::new(),
        }
    }

    #[test]
    fn retries_throttled_until_success() {
        let mut calls = 0;
        let out = run_with_retry(&instant_policy(4), "test", || {
            calls += 1;
            if calls < 3 {
                Err(status(503))
            } else {
                Ok(calls)
            }
        })
        .unwrap();
        assert_eq!(out, 3);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut calls = 0;
        let err = run_with_retry(&instant_policy(4), "test", || -> Result<(), _> {
            calls += 1;
            Err(status(503))
        })
        .unwrap_err();
        assert_eq!(calls, 4);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn client_errors_are_not_retried() {
        let mut calls = 0;
        let err = run_with_retry(&instant_policy(4), "test", || -> Result<(), _> {
            calls += 1;
            Err(status(404))
        })
        .unwrap_err();
        assert_eq!(calls, 1);
        assert_eq!(err.status(), Some(404));
    }
}
