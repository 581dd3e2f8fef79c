//! Envelopes, pagination and JSON helpers shared by all models.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::{BagelPayError, Result};

/// Structured error body returned by the API for statuses >= 400.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    /// Service error code
    #[serde(default)]
    pub code: i64,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Optional extra detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiErrorPayload {
    /// Payload used when the error body is not valid JSON.
    ///
    /// The code is the HTTP status and the message is
    /// `HTTP <status>: <raw body>`.
    #[must_use]
    pub fn fallback(status: u16, raw_body: &str) -> Self {
        Self {
            code: i64::from(status),
            message: format!("HTTP {status}: {raw_body}"),
            details: None,
        }
    }
}

/// `{"data": ...}` wrapper used by singular create/fetch/update endpoints.
///
/// A missing or `null` `data` yields `T::default()`, i.e. a record with
/// every field absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct DataEnvelope<T: Default> {
    /// The wrapped record
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

/// One page of a list endpoint.
///
/// `total` is the out-of-band count of all matching records, not the
/// length of `items`. A missing or `null` `items` is an empty page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Total number of records across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    /// Records on this page, in service order
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    /// Service status code
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    /// Service status message
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
            code: 0,
            msg: String::new(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Returns true if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Customer reference embedded in subscriptions and transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Customer identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Customer email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Page selection for list endpoints.
///
/// A zero page number or page size is left out of the query so the
/// service applies its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page_num: u32,
    /// Records per page
    pub page_size: u32,
}

impl Pagination {
    /// Creates a page selection.
    #[must_use]
    pub const fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
        }
    }

    /// Renders the selection as query parameters.
    ///
    /// Unset values map to empty strings, which the request builder drops.
    #[must_use]
    pub fn to_query(self) -> BTreeMap<&'static str, String> {
        let render = |v: u32| if v == 0 { String::new() } else { v.to_string() };

        BTreeMap::from([
            ("pageNum", render(self.page_num)),
            ("pageSize", render(self.page_size)),
        ])
    }
}

/// A string did not match any known value of a model enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field} value '{value}'")]
pub struct ParseValueError {
    /// Name of the field being parsed
    pub field: &'static str,
    /// The rejected value
    pub value: String,
}

/// Serializes a model to a JSON string.
///
/// # Errors
///
/// Returns a local [`BagelPayError`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| BagelPayError::local_with("failed to marshal JSON", e))
}

/// Parses a model from a JSON string.
///
/// # Errors
///
/// Returns a local [`BagelPayError`] if the JSON is invalid or does not
/// match `T`.
pub fn from_json<T: DeserializeOwned>(data: &str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| BagelPayError::local_with("failed to parse JSON", e))
}

/// Deserializes `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
