//! Response decoding and failure classification.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, BagelPayError, Result};
use crate::models::ApiErrorPayload;
use crate::transport::HttpResponse;

/// Decodes a buffered response into `T`, or classifies the failure.
///
/// Statuses below 400 are decoded as JSON; a decoding failure is a local
/// error, not an API error. Statuses from 400 up become an [`ApiError`]
/// (see [`classify_failure`]).
///
/// # Errors
///
/// Returns [`BagelPayError::Api`] for statuses >= 400 and
/// [`BagelPayError::Local`] when a successful body does not decode.
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if !response.is_success() {
        return Err(classify_failure(response).into());
    }

    serde_json::from_slice(&response.body)
        .map_err(|e| BagelPayError::local_with("failed to parse response", e))
}

/// Builds the classified error for a response with status >= 400.
///
/// The body is parsed as an [`ApiErrorPayload`]; if that fails, a payload
/// with the HTTP status as code and `HTTP <status>: <raw body>` as message
/// is synthesized instead.
#[must_use]
pub fn classify_failure(response: &HttpResponse) -> ApiError {
    let status = response.status;
    let payload = serde_json::from_slice::<ApiErrorPayload>(&response.body)
        .unwrap_or_else(|_| ApiErrorPayload::fallback(status.as_u16(), &response.body_lossy()));

    ApiError::from_response(status, payload)
}
