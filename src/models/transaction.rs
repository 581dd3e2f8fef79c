//! Transaction models.

use serde::{Deserialize, Serialize};

use super::{CustomerRef, ListResponse};

/// A money movement (payment, refund, ...) as returned by the API.
///
/// `amount` is the gross amount; `net` is what remains after `fees` and
/// `tax`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Related order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Gross amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Amount actually paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,
    /// Discount applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// Amount refunded so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<f64>,
    /// Tax charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    /// Country the tax applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_country: Option<String>,
    /// Tax deducted from `amount`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    /// Processing fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<f64>,
    /// Amount after fees and tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<f64>,
    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Kind of movement, e.g. `payment` or `refund`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// Paying customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
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

/// Page of transactions.
pub type TransactionListResponse = ListResponse<Transaction>;
