//! Shared types for the HTTP layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::cache::ResponseCache;
use crate::config::ServerConfig;
use crate::knowledge::KnowledgeBase;
use crate::pipeline::SymptomAnalyzer;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub analyzer: SymptomAnalyzer,
    pub cache: Arc<Mutex<ResponseCache>>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl ApiContext {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: &ServerConfig) -> Self {
        Self {
            analyzer: SymptomAnalyzer::new(knowledge),
            cache: Arc::new(Mutex::new(ResponseCache::with_max_entries(
                config.cache_ttl,
                config.cache_max_entries,
            ))),
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(
                config.rate_limit,
                config.rate_window,
            ))),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Rate limiter: per-client sliding window
// ═══════════════════════════════════════════════════════════

/// Keys tracked before idle clients are swept.
const SWEEP_THRESHOLD: usize = 1000;

/// Per-client sliding-window rate limiter.
pub struct RateLimiter {
    windows: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: HashMap::new(),
            max_requests,
            window,
        }
    }

    /// Check if a client is within its limit. Returns `Ok(())` or
    /// `Err(retry_after_secs)` if exceeded.
    pub fn check(&mut self, key: &str) -> Result<(), u64> {
        let now = Instant::now();
        if self.windows.len() > SWEEP_THRESHOLD {
            self.sweep(now);
        }

        let window = self.window;
        let entries = self.windows.entry(key.to_string()).or_default();
        entries.retain(|ts| now.duration_since(*ts) < window);

        if entries.len() as u32 >= self.max_requests {
            // Oldest request leaves the window first
            let oldest = entries.first().copied().unwrap_or(now);
            let remaining = window.saturating_sub(now.duration_since(oldest));
            let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            return Err(secs.max(1));
        }

        entries.push(now);
        Ok(())
    }

    fn sweep(&mut self, now: Instant) {
        let window = self.window;
        self.windows.retain(|_, entries| {
            entries.retain(|ts| now.duration_since(*ts) < window);
            !entries.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
    }

    #[test]
    fn rejects_over_limit_with_retry_after() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(60));
        limiter.check("10.0.0.1").unwrap();
        limiter.check("10.0.0.1").unwrap();

        let retry_after = limiter.check("10.0.0.1").unwrap_err();
        assert!((1..=60).contains(&retry_after));
    }

    #[test]
    fn retry_after_rounds_partial_seconds_up() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        limiter.check("k").unwrap();
        // Just under 60 s remain
        assert_eq!(limiter.check("k").unwrap_err(), 60);

        let mut limiter = RateLimiter::new(1, Duration::from_millis(1500));
        limiter.check("k").unwrap();
        assert_eq!(limiter.check("k").unwrap_err(), 2);
    }

    #[test]
    fn clients_limited_independently() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
        assert!(limiter.check("10.0.0.2").is_ok());
    }

    #[test]
    fn requests_expire_with_window() {
        let mut limiter = RateLimiter::new(1, Duration::ZERO);
        assert!(limiter.check("10.0.0.1").is_ok());
        // Zero-length window: the previous request has already left it
        assert!(limiter.check("10.0.0.1").is_ok());
    }

    #[test]
    fn rejected_requests_do_not_count() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        limiter.check("k").unwrap();
        for _ in 0..5 {
            assert!(limiter.check("k").is_err());
        }
        assert_eq!(limiter.windows["k"].len(), 1);
    }

    #[test]
    fn idle_clients_swept() {
        let mut limiter = RateLimiter::new(5, Duration::ZERO);
        for i in 0..=SWEEP_THRESHOLD {
            limiter.check(&format!("client-{i}")).unwrap();
        }
        limiter.check("fresh").unwrap();
        assert_eq!(limiter.windows.len(), 1);
    }

    #[test]
    fn context_built_from_config() {
        let config = ServerConfig::default();
        let ctx = ApiContext::new(Arc::new(KnowledgeBase::builtin().unwrap()), &config);
        assert!(ctx.cache.lock().unwrap().is_empty());
        assert_eq!(ctx.analyzer.knowledge().conditions().len(), 15);
    }
}
