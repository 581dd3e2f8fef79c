//! Default values for client construction.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::time::Duration;

/// Base URL of the test (sandbox) environment.
pub const TEST_BASE_URL: &str = "https://test.bagelpay.io";

/// Base URL of the live environment.
pub const LIVE_BASE_URL: &str = "https://live.bagelpay.io";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// User agent identifying this SDK.
pub const USER_AGENT: &str = concat!("BagelPay-Rust-SDK/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
