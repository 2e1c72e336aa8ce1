//! Rate Limiting Middleware
//!
//! In-process per-client rate limiting using a sliding window. Each client
//! identifier keeps the timestamps of its recent requests; a request is
//! allowed while fewer than the configured number fall inside the window.

use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde::Serialize;

use crate::config::RateLimitSettings;
use crate::shared::error::ErrorResponse;
use crate::startup::AppState;

// ============================================================================
// Rate Limit Configuration
// ============================================================================

/// Configuration for rate limiting behavior.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub requests_per_window: u32,
    /// Window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 60,
            window: Duration::from_secs(60),
        }
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            requests_per_window: settings.requests_per_window,
            window: Duration::from_secs(settings.window_seconds),
        }
    }
}

// ============================================================================
// Rate Limit Response
// ============================================================================

/// Information about rate limit status returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets
    pub reset_at: i64,
    /// Seconds until the rate limit resets
    pub retry_after: u64,
}

/// Rate limit exceeded error response.
#[derive(Debug, Serialize)]
struct RateLimitExceededResponse {
    #[serde(flatten)]
    error: ErrorResponse,
    rate_limit: RateLimitInfo,
}

// ============================================================================
// Rate Limiter Implementation
// ============================================================================

/// Sliding window rate limiter keyed by client identifier.
///
/// State is local to the process; several instances behind a load balancer
/// each enforce their own limit.
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter instance.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: DashMap::new(),
        }
    }

    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Check if a request should be allowed, consuming one slot if so.
    ///
    /// Returns `Ok(RateLimitInfo)` if allowed, `Err(RateLimitInfo)` if rate limited.
    pub fn check(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        self.check_at(identifier, Instant::now())
    }

    fn check_at(&self, identifier: &str, now: Instant) -> Result<RateLimitInfo, RateLimitInfo> {
        let limit = self.config.requests_per_window;
        let window = self.config.window;

        let mut entry = self.windows.entry(identifier.to_owned()).or_default();
        let hits = entry.value_mut();
        evict_expired(hits, now, window);

        let allowed = hits.len() < limit as usize;
        if allowed {
            hits.push_back(now);
        }

        // The window frees its first slot when the oldest hit expires.
        let until_reset = hits
            .front()
            .map(|oldest| (*oldest + window).saturating_duration_since(now))
            .unwrap_or(window);

        let reset_in = ceil_secs(until_reset);
        let info = RateLimitInfo {
            limit,
            remaining: limit.saturating_sub(hits.len() as u32),
            reset_at: chrono::Utc::now().timestamp() + reset_in as i64,
            retry_after: if allowed { 0 } else { reset_in },
        };

        if allowed {
            Ok(info)
        } else {
            Err(info)
        }
    }

    /// Drop identifiers with no hits left in the window.
    pub fn purge_expired(&self) {
        self.purge_expired_at(Instant::now());
    }

    fn purge_expired_at(&self, now: Instant) {
        let window = self.config.window;
        self.windows.retain(|_, hits| {
            evict_expired(hits, now, window);
            !hits.is_empty()
        });
    }

    /// Number of identifiers currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

fn evict_expired(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(oldest) = hits.front() {
        if now.saturating_duration_since(*oldest) >= window {
            hits.pop_front();
        } else {
            break;
        }
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

// ============================================================================
// Identifier Extraction
// ============================================================================

/// Extract the rate limit identifier from a request.
///
/// Priority:
/// 1. X-Forwarded-For header (first address in the chain)
/// 2. X-Real-IP header
/// 3. Peer address from the connection
///
/// Forwarding headers can be spoofed unless a trusted proxy sets them.
fn extract_identifier(request: &Request, client_ip: Option<IpAddr>) -> String {
    if let Some(forwarded_for) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded_for.split(',').next() {
            let ip = first_ip.trim();
            if ip.parse::<IpAddr>().is_ok() {
                return format!("ip:{}", ip);
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
    {
        if real_ip.parse::<IpAddr>().is_ok() {
            return format!("ip:{}", real_ip);
        }
    }

    match client_ip {
        Some(ip) => format!("ip:{}", ip),
        None => {
            tracing::warn!("Could not determine client identifier for rate limiting");
            "ip:unknown".to_string()
        }
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Rate limiting middleware for API endpoints.
///
/// Passes requests straight through when rate limiting is disabled.
pub async fn rate_limit_api(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(limiter) = state.rate_limiter.clone() else {
        return next.run(request).await;
    };

    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());
    let identifier = extract_identifier(&request, client_ip);

    match limiter.check(&identifier) {
        Ok(info) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), &info);
            response
        }
        Err(info) => {
            tracing::warn!(identifier = %identifier, "Rate limit exceeded");
            create_rate_limit_response(info)
        }
    }
}

/// Add rate limit headers to a response.
fn add_rate_limit_headers(headers: &mut header::HeaderMap, info: &RateLimitInfo) {
    headers.insert("X-RateLimit-Limit", header::HeaderValue::from(info.limit));
    headers.insert("X-RateLimit-Remaining", header::HeaderValue::from(info.remaining));
    headers.insert("X-RateLimit-Reset", header::HeaderValue::from(info.reset_at));
}

/// Create a 429 Too Many Requests response.
fn create_rate_limit_response(info: RateLimitInfo) -> Response {
    let body = RateLimitExceededResponse {
        error: ErrorResponse {
            code: 10006,
            message: "You are being rate limited. Please slow down.".to_string(),
            errors: None,
        },
        rate_limit: info.clone(),
    };

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    response
        .headers_mut()
        .insert(header::RETRY_AFTER, header::HeaderValue::from(info.retry_after));
    add_rate_limit_headers(response.headers_mut(), &info);

    response
}

// ============================================================================
// Tests
// ============================================================================
