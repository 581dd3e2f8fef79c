//! Checkout session models.

use serde::{Deserialize, Serialize};

/// Free-form checkout metadata: string keys, arbitrary JSON values.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Payer identity attached to a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutCustomer {
    /// Payer email
    pub email: String,
}

/// Body of `POST /api/payments/checkouts`.
///
/// # Example
///
/// ```
/// use bagelpay::models::CheckoutRequest;
///
/// let request = CheckoutRequest::new("prod_123")
///     .with_customer_email("payer@example.com")
///     .with_request_id("req_42")
///     .with_metadata("order_id", "order_42");
/// assert_eq!(request.product_id, "prod_123");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Product being bought
    pub product_id: String,
    /// Payer identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CheckoutCustomer>,
    /// Caller-chosen idempotency key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Quantity, as the service expects a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Where the payer lands after paying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Echoed back on the checkout and its webhooks
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl CheckoutRequest {
    /// Starts a checkout for `product_id` with nothing else set.
    #[must_use]
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            customer: None,
            request_id: None,
            units: None,
            success_url: None,
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer = Some(CheckoutCustomer {
            email: email.into(),
        });
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    #[must_use]
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    /// Adds one metadata entry, replacing an existing value for `key`.
    #[must_use]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A created checkout session.
///
/// Redirect the payer to `checkout_url` before `expires_on`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Payment created for this checkout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Hosted payment page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    /// Checkout state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When `checkout_url` stops working
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    /// Object type tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<i64>,
    /// Metadata from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// `test` or `live`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Product being bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Idempotency key from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Post-payment redirect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
