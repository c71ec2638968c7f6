//! Process-wide pacing of plan transitions.
//!
//! Every transition stands in for a paced real-world call, so consecutive
//! transitions across all concurrent planning requests are spaced at least
//! `min_interval` apart.

use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::planner::central_config;

static SHARED_LIMITER: Lazy<Arc<RateLimiter>> = Lazy::new(|| {
    Arc::new(RateLimiter::new(
        central_config().rate_limit.min_interval(),
    ))
});

/// The limiter shared by every planning request in this process.
pub fn shared_rate_limiter() -> Arc<RateLimiter> {
    Arc::clone(&SHARED_LIMITER)
}

/// Minimum-interval limiter guarded by a mutex.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Limiter that never blocks.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Block until `min_interval` has passed since the previous call, then
    /// record this call. Returns how long the caller slept.
    ///
    /// The lock is held across the sleep so two callers can never share
    /// one interval window.
    pub fn wait(&self) -> Duration {
        // Only a timestamp lives behind the lock, so a poisoned guard is still usable.
        let mut last_call = self
            .last_call
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut waited = Duration::ZERO;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                debug!(wait_ms = waited.as_millis() as u64, "Rate limiting transition");
                thread::sleep(waited);
            }
        }

        *last_call = Some(Instant::now());
        waited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_waits() {
        let limiter = RateLimiter::disabled();
        for _ in 0..10 {
            assert_eq!(limiter.wait(), Duration::ZERO);
        }
    }

    #[test]
    fn test_first_call_is_free() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        assert_eq!(limiter.wait(), Duration::ZERO);
    }

    #[test]
    fn test_second_call_waits_remaining_interval() {
        let interval = Duration::from_millis(40);
        let limiter = RateLimiter::new(interval);

        let start = Instant::now();
        limiter.wait();
        let waited = limiter.wait();

        assert!(waited > Duration::ZERO);
        assert!(waited <= interval);
        assert!(start.elapsed() >= interval);
    }

    #[test]
    fn test_concurrent_callers_are_serialised() {
        let interval = Duration::from_millis(25);
        let limiter = Arc::new(RateLimiter::new(interval));
        let start = Instant::now();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                thread::spawn(move || limiter.wait())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Four calls need at least three full intervals between them.
        assert!(start.elapsed() >= interval * 3);
    }
}
