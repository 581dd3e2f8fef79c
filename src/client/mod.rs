//! BagelPay API client.
//!
//! This module provides:
//! - Client configuration ([`ClientConfig`], [`Mode`])
//! - The API client itself ([`BagelPayClient`])
//! - Response decoding and failure classification ([`parse_response`],
//!   [`classify_failure`])
//! - Default values ([`defaults`])
//!
//! # Request flow
//!
//! 1. The operation builds the URL from the base URL, the endpoint path and
//!    any non-empty query parameters.
//! 2. POST bodies are serialized to JSON; GET requests never carry a body.
//! 3. `Content-Type`, `User-Agent` and `x-api-key` headers are attached.
//! 4. The response body is buffered in full, then the status decides
//!    between decoding the record and classifying an [`ApiError`](crate::ApiError).

mod api;
mod config;
pub mod defaults;
mod response;

#[cfg(test)]
mod response_tests;
#[cfg(test)]
mod test_fixtures;

pub use api::BagelPayClient;
pub use config::{ClientConfig, Mode, mask_key};
pub use response::{classify_failure, parse_response};
