//! Customer models.

use serde::{Deserialize, Serialize};

use super::ListResponse;

/// A customer with aggregate counters, as returned by the customer list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    /// Numeric customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of subscriptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<i64>,
    /// Number of payments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<i64>,
    /// Lifetime spend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spend: Option<f64>,
    /// Owning store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
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

/// Page of customers.
pub type CustomerListResponse = ListResponse<CustomerData>;
