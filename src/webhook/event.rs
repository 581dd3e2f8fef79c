//! Webhook event payloads.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WebhookError;

/// Kind of a webhook delivery, taken from the payload's `event_type`.
///
/// Values this crate does not know are kept verbatim in
/// [`EventType::Unknown`]; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    CheckoutCompleted,
    CheckoutFailed,
    CheckoutCancel,
    SubscriptionTrialing,
    SubscriptionPaid,
    SubscriptionCanceled,
    RefundCreated,
    Unknown(String),
}

impl EventType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CheckoutCompleted => "checkout.completed",
            Self::CheckoutFailed => "checkout.failed",
            Self::CheckoutCancel => "checkout.cancel",
            Self::SubscriptionTrialing => "subscription.trialing",
            Self::SubscriptionPaid => "subscription.paid",
            Self::SubscriptionCanceled => "subscription.canceled",
            Self::RefundCreated => "refund.created",
            Self::Unknown(other) => other,
        }
    }

    /// Returns true for values outside the known set.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "checkout.completed" => Self::CheckoutCompleted,
            "checkout.failed" => Self::CheckoutFailed,
            "checkout.cancel" => Self::CheckoutCancel,
            "subscription.trialing" => Self::SubscriptionTrialing,
            "subscription.paid" => Self::SubscriptionPaid,
            "subscription.canceled" => Self::SubscriptionCanceled,
            "refund.created" => Self::RefundCreated,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for EventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    /// Kind of event
    pub event_type: EventType,
    /// The full JSON body, `event_type` included
    pub payload: Value,
}

impl WebhookEvent {
    /// Parses a delivery body.
    ///
    /// This does not check the signature; see
    /// [`WebhookVerifier::verify_and_parse`](super::WebhookVerifier::verify_and_parse).
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidPayload`] if the body is not JSON and
    /// [`WebhookError::MissingEventType`] if it has no string `event_type`.
    pub fn parse(body: &[u8]) -> Result<Self, WebhookError> {
        let payload: Value = serde_json::from_slice(body).map_err(WebhookError::InvalidPayload)?;

        let event_type = payload
            .get("event_type")
            .and_then(Value::as_str)
            .map(EventType::from)
            .ok_or(WebhookError::MissingEventType)?;

        if event_type.is_unknown() {
            tracing::debug!(event_type = %event_type, "Received unknown webhook event type");
        }

        Ok(Self {
            event_type,
            payload,
        })
    }

    /// Returns a top-level field of the payload.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Returns the `object` field, which carries the affected record.
    #[must_use]
    pub fn object(&self) -> Option<&Value> {
        self.get("object")
    }
}
