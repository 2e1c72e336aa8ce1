//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod rate_limit;

pub use metrics::track_metrics;
pub use rate_limit::{rate_limit_api, RateLimitConfig, RateLimitInfo, RateLimiter};
