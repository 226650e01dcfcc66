//! Rolling-window call quota.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

/// Shared call quota over a rolling time window.
///
/// Each call occupies one slot for the window duration; a caller over quota
/// is suspended until the window rolls past an earlier call. Requests are
/// never dropped or failed by the limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter admitting `max_calls` per rolling `window`.
    #[must_use]
    pub fn new(max_calls: usize, window: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_calls)),
            window,
        }
    }

    /// Waits until a call slot is available and consumes it.
    ///
    /// The slot is released automatically once the window duration has
    /// elapsed, sliding the quota forward.
    pub async fn acquire(&self) {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("rate limiter semaphore never closes");

        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            drop(permit);
        });
    }

    /// Returns the number of immediately available call slots.
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_third_call_waits_for_window() {
        let window = Duration::from_secs(60);
        let limiter = RateLimiter::new(2, window);

        let begin = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(begin.elapsed() < window);

        // The third call must be held back until the window rolls over.
        limiter.acquire().await;
        assert!(begin.elapsed() >= window);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slots_return_after_window() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));
        limiter.acquire().await;
        assert_eq!(limiter.available(), 0);

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(limiter.available(), 1);
    }
}
