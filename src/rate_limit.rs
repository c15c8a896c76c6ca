use std::time::{Duration, Instant};

use dashmap::DashMap;

const MAX_FAILURES: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-email signin brute-force limiter: 5 failures per 15 minutes.
pub struct SigninRateLimiter {
    /// email -> (failed_count, window_start)
    entries: DashMap<String, (u32, Instant)>,
}

impl SigninRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a signin attempt is allowed. Does NOT increment the counter.
    /// Returns retry-after seconds when the email is locked out.
    pub fn check(&self, email: &str) -> Result<(), u64> {
        let now = Instant::now();

        let Some(entry) = self.entries.get(&email.to_lowercase()) else {
            return Ok(());
        };
        let (count, start) = entry.value();

        if now.duration_since(*start) > WINDOW {
            return Ok(());
        }

        if *count >= MAX_FAILURES {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(WINDOW.as_secs().saturating_sub(elapsed));
        }

        Ok(())
    }

    /// Record a failed signin for the given email.
    pub fn record_failure(&self, email: &str) {
        let now = Instant::now();

        let mut entry = self.entries.entry(email.to_lowercase()).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > WINDOW {
            *count = 1;
            *start = now;
        } else {
            *count += 1;
        }
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}

impl Default for SigninRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_out_after_five_failures() {
        let limiter = SigninRateLimiter::new();
        assert!(limiter.check("a@b.com").is_ok());

        for _ in 0..MAX_FAILURES {
            limiter.record_failure("a@b.com");
        }
        assert!(limiter.check("a@b.com").is_err());
        // Other emails unaffected.
        assert!(limiter.check("c@d.com").is_ok());
    }

    #[test]
    fn email_is_case_insensitive() {
        let limiter = SigninRateLimiter::new();
        for _ in 0..MAX_FAILURES {
            limiter.record_failure("User@Example.com");
        }
        assert!(limiter.check("user@example.com").is_err());
    }
}
