use axum::http::Method;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::addr::{as_ipv4, split_host_port};
use crate::error::AdmissionError;
use crate::rate_limit::RateLimiter;

// Request handling context shared by every connection (one global limiter, no per-client map)
pub struct Visitor {
    limiter: Arc<RateLimiter>,
    body: String,
    last_seen_ms: AtomicI64, // unix millis of last request, not used for decisions
}

impl Visitor {
    pub fn new(limiter: Arc<RateLimiter>, body: impl Into<String>) -> Self {
        Self {
            limiter,
            body: body.into(),
            last_seen_ms: AtomicI64::new(Utc::now().timestamp_millis()),
        }
    }

    // Gate chain: method -> address -> IPv4 -> quota.
    // Earlier checks return before the limiter is touched.
    pub fn admit(&self, method: &Method, remote_addr: &str) -> Result<(), AdmissionError> {
        self.last_seen_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);

        if *method != Method::GET {
            return Err(AdmissionError::MethodNotAllowed);
        }

        let (host, _port) = split_host_port(remote_addr).map_err(|e| {
            tracing::debug!(error = %e, "unparsable remote address");
            AdmissionError::MalformedAddress
        })?;

        // IPv4 sources only
        if as_ipv4(host).is_none() {
            return Err(AdmissionError::NotIpv4);
        }

        if !self.limiter.allow() {
            return Err(AdmissionError::TooManyRequests);
        }

        Ok(())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        let ms = self.last_seen_ms.load(Ordering::Relaxed);
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
}
