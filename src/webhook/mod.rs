//! Inbound webhook verification.
//!
//! BagelPay signs each delivery with HMAC-SHA256 over
//! `"<timestamp>." ++ body`, keyed by the endpoint secret, and sends the
//! lowercase hex digest in the [`SIGNATURE_HEADER`] header alongside the
//! [`TIMESTAMP_HEADER`] header.
//!
//! - [`verify_signature`] is the stateless check.
//! - [`WebhookVerifier`] adds an optional replay window and parses the
//!   verified body into a [`WebhookEvent`].
//!
//! # Example
//!
//! ```
//! use bagelpay::webhook::{EventType, WebhookVerifier, compute_signature};
//!
//! let body = br#"{"event_type":"checkout.completed","object":{}}"#;
//! let signature = compute_signature("whsec", "1700000000", body).unwrap();
//!
//! let event = WebhookVerifier::new("whsec")
//!     .verify_and_parse(body, "1700000000", &signature)
//!     .unwrap();
//! assert_eq!(event.event_type, EventType::CheckoutCompleted);
//! ```

mod error;
mod event;
mod signature;
mod verifier;


pub use error::WebhookError;
pub use event::{EventType, WebhookEvent};
pub use signature::{compute_signature, verify_signature};
pub use verifier::WebhookVerifier;

/// Header carrying the delivery timestamp (Unix seconds).
pub const TIMESTAMP_HEADER: &str = "timestamp";

/// Header carrying the hex-encoded HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "bagelpay-signature";
