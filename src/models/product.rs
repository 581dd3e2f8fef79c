//! Product catalog models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ListResponse, ParseValueError};

/// Whether a product is bought once or on a recurring cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    /// One-off purchase
    SinglePayment,
    /// Recurring purchase; needs a [`RecurringInterval`]
    Subscription,
}

impl BillingType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SinglePayment => "single_payment",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_payment" => Ok(Self::SinglePayment),
            "subscription" => Ok(Self::Subscription),
            _ => Err(ParseValueError {
                field: "billing_type",
                value: s.to_string(),
            }),
        }
    }
}

/// Billing cadence of a subscription product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringInterval {
    /// Every day
    #[serde(rename = "daily")]
    Daily,
    /// Every week
    #[serde(rename = "weekly")]
    Weekly,
    /// Every month
    #[serde(rename = "monthly")]
    Monthly,
    /// Every three months
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Every six months
    #[serde(rename = "6months")]
    SixMonths,
}

impl RecurringInterval {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
        }
    }
}

impl fmt::Display for RecurringInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurringInterval {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            _ => Err(ParseValueError {
                field: "recurring_interval",
                value: s.to_string(),
            }),
        }
    }
}

/// A product as returned by the API.
///
/// `billing_type` and `recurring_interval` are kept as the raw strings the
/// service sent (single-payment products may carry an empty interval); use
/// [`Product::billing`] and [`Product::interval`] for typed access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Owning store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in `currency`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Object type tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// `test` or `live`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Hosted product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// `single_payment` or `subscription`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<String>,
    /// Billing period label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
    /// Tax category code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<String>,
    /// Whether `price` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
    /// Whether the product is archived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archive: Option<bool>,
    /// Trial length in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<i64>,
    /// Raw billing cadence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// Typed billing type, if present and recognized.
    #[must_use]
    pub fn billing(&self) -> Option<BillingType> {
        self.billing_type.as_deref().and_then(|s| s.parse().ok())
    }

    /// Typed recurring interval, if present and recognized.
    #[must_use]
    pub fn interval(&self) -> Option<RecurringInterval> {
        self.recurring_interval
            .as_deref()
            .and_then(|s| s.parse().ok())
    }
}

/// Page of products.
pub type ProductListResponse = ListResponse<Product>;

/// Body of `POST /api/products/create`.
///
/// Use [`CreateProductRequest::single_payment`] or
/// [`CreateProductRequest::subscription`]; only subscriptions carry a
/// recurring interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in `currency`
    pub price: f64,
    /// ISO currency code
    pub currency: String,
    /// One-off or recurring
    pub billing_type: BillingType,
    /// Whether `price` includes tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
    /// Tax category code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<String>,
    /// Billing cadence; subscriptions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
    /// Trial length in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

impl CreateProductRequest {
    /// A one-off product.
    #[must_use]
    pub fn single_payment(name: impl Into<String>, price: f64, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            currency: currency.into(),
            billing_type: BillingType::SinglePayment,
            tax_inclusive: None,
            tax_category: None,
            recurring_interval: None,
            trial_days: None,
        }
    }

    /// A subscription product billed every `interval`.
    #[must_use]
    pub fn subscription(
        name: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
        interval: RecurringInterval,
    ) -> Self {
        Self {
            billing_type: BillingType::Subscription,
            recurring_interval: Some(interval),
            ..Self::single_payment(name, price, currency)
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tax category (e.g. `saas`, `digital-products`).
    #[must_use]
    pub fn with_tax_category(mut self, category: impl Into<String>) -> Self {
        self.tax_category = Some(category.into());
        self
    }

    /// Sets whether the price already includes tax.
    #[must_use]
    pub const fn with_tax_inclusive(mut self, inclusive: bool) -> Self {
        self.tax_inclusive = Some(inclusive);
        self
    }

    /// Sets the trial length in days. Only meaningful for subscriptions.
    #[must_use]
    pub const fn with_trial_days(mut self, days: u32) -> Self {
        self.trial_days = Some(days);
        self
    }
}

/// Body of `POST /api/products/update`: the product id plus the full set
/// of product fields, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    /// Product to update
    pub product_id: String,
    /// Replacement field values
    #[serde(flatten)]
    pub product: CreateProductRequest,
}

impl UpdateProductRequest {
    /// Replaces the fields of `product_id` with `product`.
    #[must_use]
    pub fn new(product_id: impl Into<String>, product: CreateProductRequest) -> Self {
        Self {
            product_id: product_id.into(),
            product,
        }
    }
}
