use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_MAX_REQUESTS: u32 = 5;
const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Fixed-window request counter keyed by client address. In-process and
/// best-effort only: counters are not shared across instances, which is
/// acceptable for a single-instance deployment.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    hits: Mutex<HashMap<String, (u32, Instant)>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `true` when the request is allowed.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut hits = match self.hits.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if hits.len() > 1024 {
            let window = self.window;
            hits.retain(|_, (_, start)| now.duration_since(*start) < window);
        }

        match hits.get_mut(key) {
            Some((count, start)) if now.duration_since(*start) < self.window => {
                if *count >= self.max_requests {
                    false
                } else {
                    *count += 1;
                    true
                }
            }
            _ => {
                hits.insert(key.to_string(), (1, now));
                true
            }
        }
    }
}
