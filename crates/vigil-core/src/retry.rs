//! Bounded retry with a fixed delay between attempts.

use std::future::Future;
use std::time::Duration;

/// Run `op` up to `attempts` times, sleeping `delay` between attempts.
///
/// The operation receives the 1-based attempt number. The first `Ok`
/// wins; once the budget is exhausted the error of the final attempt
/// is returned. A zero delay retries immediately (the probe policy);
/// the delay is fixed, not exponential, and carries no jitter.
pub async fn with_retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    debug_assert!(attempts > 0, "retry budget must allow at least one attempt");

    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= attempts => return Err(err),
            Err(_) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
        }
    }
}
