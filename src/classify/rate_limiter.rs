// Request pacing for the hosted classifier.
//
// Hosted inference endpoints throttle bursty clients. Each caller reserves
// the next free slot under the lock, then sleeps until that slot outside
// it, so concurrent callers are spaced out instead of racing.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Spaces requests at least `interval` apart across all clones.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
}

struct RateLimiterInner {
    interval: Duration,
    /// Earliest instant the next request may start
    next_slot: Option<Instant>,
}

impl RateLimiter {
    /// Allow `requests_per_second` requests per second.
    pub fn new(requests_per_second: f64) -> Self {
        let interval = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                interval,
                next_slot: None,
            })),
        }
    }

    /// Wait until this caller's reserved slot arrives.
    pub async fn acquire(&self) {
        let slot = {
            let mut inner = self.inner.lock().await;
            let now = Instant::now();
            let slot = match inner.next_slot {
                Some(next) if next > now => next,
                _ => now,
            };
            inner.next_slot = Some(slot + inner.interval);
            slot
        };
        tokio::time::sleep_until(slot).await;
    }
}
