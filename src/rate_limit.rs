use parking_lot::Mutex;
use std::time::{Duration, Instant};

// Counter state for the current window
struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub count: u32,
    pub limit: u32,
    pub window_start: Instant,
}

// Global fixed-window counter: at most `limit` admissions per `interval`.
// Reset is lazy, the new window starts at the arrival that noticed expiry.
pub struct RateLimiter {
    limit: u32,
    interval: Duration,
    entry: Mutex<RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(limit: u32, interval: Duration) -> Self {
        Self {
            limit,
            interval,
            entry: Mutex::new(RateLimitEntry {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    // Decide admission for a request arriving right now
    pub fn allow(&self) -> bool {
        self.allow_at(Instant::now())
    }

    // Same decision at an explicit instant (earlier than window start = no time elapsed)
    pub fn allow_at(&self, now: Instant) -> bool {
        let mut entry = self.entry.lock();

        // window expired..? Reset it (exactly `interval` is still the old window)
        if now.saturating_duration_since(entry.window_start) > self.interval {
            entry.count = 0;
            entry.window_start = now;
        }

        // under limit..? Allow
        if entry.count < self.limit {
            entry.count += 1;
            return true;
        }

        // over limit, state untouched
        false
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        let entry = self.entry.lock();
        WindowSnapshot {
            count: entry.count,
            limit: self.limit,
            window_start: entry.window_start,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
