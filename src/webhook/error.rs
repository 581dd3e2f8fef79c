//! Webhook error types.

use thiserror::Error;

/// Why a webhook delivery was rejected.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The secret cannot key an HMAC.
    #[error("Invalid webhook secret")]
    InvalidSecret,

    /// The signature does not match the body and timestamp.
    #[error("Webhook signature mismatch")]
    InvalidSignature,

    /// The timestamp header is not a Unix time in seconds.
    #[error("Invalid webhook timestamp '{0}'")]
    InvalidTimestamp(String),

    /// The timestamp lies outside the accepted window.
    #[error("Webhook timestamp is {skew_secs}s away from now (tolerance {tolerance_secs}s)")]
    OutsideTolerance {
        /// Distance between the timestamp and the local clock
        skew_secs: u64,
        /// Configured window
        tolerance_secs: u64,
    },

    /// The body is not valid JSON.
    #[error("Invalid webhook payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// The body has no string `event_type` field.
    #[error("Webhook payload has no event_type")]
    MissingEventType,
}
