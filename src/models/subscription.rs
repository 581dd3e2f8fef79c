//! Subscription models.

use serde::{Deserialize, Serialize};

use super::{CustomerRef, ListResponse, RecurringInterval};

/// A subscription as returned by the API.
///
/// `status` is the lifecycle state reported by the service (for example
/// `trialing`, `active` or `canceled`); the set of values belongs to the
/// service, so it is kept as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique subscription id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Subscribed customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    /// Subscribed product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Name of the subscribed product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Amount billed per cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Amount of the next charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_amount: Option<f64>,
    /// Quantity subscribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<i64>,
    /// Start of the current period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period_start: Option<String>,
    /// End of the current period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period_end: Option<String>,
    /// Scheduled cancellation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_at: Option<String>,
    /// Trial start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_start: Option<String>,
    /// Trial end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<String>,
    /// Raw billing cadence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<String>,
    /// Payment method on file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Last four digits of the card on file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    /// Owning store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Object type tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// `test` or `live`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Subscription {
    /// Typed recurring interval, if present and recognized.
    #[must_use]
    pub fn interval(&self) -> Option<RecurringInterval> {
        self.recurring_interval
            .as_deref()
            .and_then(|s| s.parse().ok())
    }

    /// Returns true if the service reports the subscription as canceled.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("canceled"))
    }
}

/// Page of subscriptions.
pub type SubscriptionListResponse = ListResponse<Subscription>;
