//! Error taxonomy for BagelPay operations.
//!
//! Every client operation fails with a [`BagelPayError`]:
//!
//! - [`BagelPayError::Local`]: something went wrong on this side of the
//!   wire (invalid URL, JSON encoding/decoding, transport failure). Carries
//!   a message and the underlying cause.
//! - [`BagelPayError::Api`]: the service answered with a status >= 400.
//!   The [`ApiError`] carries the status, the service's error code, the
//!   parsed error payload and an [`ApiErrorKind`] used for dispatch.
//!
//! Callers branch on kind through the `is_*_error` predicates rather than
//! matching on message text:
//!
//! ```
//! use bagelpay::{ApiError, ApiErrorKind, BagelPayError};
//!
//! let err = BagelPayError::from(ApiError::new(ApiErrorKind::RateLimit, "slow down"));
//! assert!(err.is_rate_limit_error());
//! assert!(err.is_api_error());
//! assert_eq!(err.status_code(), Some(429));
//! ```

use std::fmt;

use http::StatusCode;
use thiserror::Error;

use crate::models::ApiErrorPayload;
use crate::transport::HttpError;

/// Boxed error used as the cause of a BagelPay error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for BagelPay operations.
pub type Result<T, E = BagelPayError> = std::result::Result<T, E>;

/// Classification of an API failure, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 401: the API key was missing or rejected.
    Authentication,
    /// 400: the request was malformed or failed validation.
    Validation,
    /// 404: the addressed resource does not exist.
    NotFound,
    /// 429: too many requests.
    RateLimit,
    /// Any 5xx status.
    Server,
    /// Any other status >= 400.
    Other,
}

impl ApiErrorKind {
    /// Classifies an HTTP status code.
    ///
    /// Only meaningful for statuses >= 400; anything else maps to
    /// [`ApiErrorKind::Other`].
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Authentication,
            400 => Self::Validation,
            404 => Self::NotFound,
            429 => Self::RateLimit,
            500.. => Self::Server,
            _ => Self::Other,
        }
    }

    /// Status assumed when an error of this kind is built without one.
    #[must_use]
    pub const fn default_status(self) -> Option<StatusCode> {
        match self {
            Self::Authentication => Some(StatusCode::UNAUTHORIZED),
            Self::Validation => Some(StatusCode::BAD_REQUEST),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::RateLimit => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Server => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Other => None,
        }
    }

    /// Human-readable prefix used when rendering the error.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Authentication => "BagelPay authentication error",
            Self::Validation => "BagelPay validation error",
            Self::NotFound => "BagelPay not found error",
            Self::RateLimit => "BagelPay rate limit error",
            Self::Server => "BagelPay server error",
            Self::Other => "BagelPay API error",
        }
    }
}

/// An error reported by the BagelPay API (HTTP status >= 400).
#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    status: Option<StatusCode>,
    error_code: String,
    message: String,
    payload: Option<ApiErrorPayload>,
    source: Option<BoxError>,
}

impl ApiError {
    /// Creates an error of the given kind with its default status.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.default_status(),
            error_code: String::new(),
            message: message.into(),
            payload: None,
            source: None,
        }
    }

    /// Builds the classified error for a failed response.
    ///
    /// The kind follows the status, the message is the payload's message
    /// and the error code is the payload's numeric code (empty when zero).
    #[must_use]
    pub fn from_response(status: StatusCode, payload: ApiErrorPayload) -> Self {
        let error_code = if payload.code == 0 {
            String::new()
        } else {
            payload.code.to_string()
        };

        Self {
            kind: ApiErrorKind::from_status(status.as_u16()),
            status: Some(status),
            error_code,
            message: payload.message.clone(),
            payload: Some(payload),
            source: None,
        }
    }

    /// Overrides the HTTP status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the service error code.
    #[must_use]
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Attaches the structured error payload.
    #[must_use]
    pub fn with_payload(mut self, payload: ApiErrorPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches an underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the HTTP status, if known.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Returns the HTTP status as a number, if known.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    /// Returns the service error code, or an empty string.
    #[must_use]
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the structured payload the service sent (or the synthesized one).
    #[must_use]
    pub const fn payload(&self) -> Option<&ApiErrorPayload> {
        self.payload.as_ref()
    }

    /// Renders `message | Status: <status> | Code: <code>` for log lines.
    ///
    /// Status and code are left out when unknown.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![self.message.clone()];
        if let Some(status) = self.status_code() {
            parts.push(format!("Status: {status}"));
        }
        if !self.error_code.is_empty() {
            parts.push(format!("Code: {}", self.error_code));
        }
        parts.join(" | ")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status_code()) {
            (ApiErrorKind::Other, Some(status)) => {
                write!(f, "{} (status {status}): {}", self.kind.prefix(), self.message)
            }
            _ => write!(f, "{}: {}", self.kind.prefix(), self.message),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Error type for every BagelPay client operation.
#[derive(Debug, Error)]
pub enum BagelPayError {
    /// A failure that happened before or after the API answered:
    /// URL construction, JSON encoding/decoding, or the transport itself.
    #[error("BagelPay error: {message}{}", caused_by(.source))]
    Local {
        /// What the client was doing
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxError>,
    },

    /// The API answered with a status >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn caused_by(source: &Option<BoxError>) -> String {
    source
        .as_ref()
        .map_or_else(String::new, |e| format!(" (caused by: {e})"))
}

impl BagelPayError {
    /// Creates a local error without a cause.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self::Local {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a local error wrapping `source`.
    #[must_use]
    pub fn local_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Local {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the API error, if the service reported one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::Local { .. } => None,
        }
    }

    /// Returns the API error kind, if the service reported an error.
    #[must_use]
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(ApiError::kind)
    }

    /// Returns the HTTP status of an API error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().and_then(ApiError::status_code)
    }

    /// Returns the error message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Local { message, .. } => message,
            Self::Api(e) => e.message(),
        }
    }

    /// Renders the error for log lines; see [`ApiError::summary`].
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Local { message, .. } => message.clone(),
            Self::Api(e) => e.summary(),
        }
    }

    /// True for any error reported by the API, whatever its kind.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// True for 401 responses.
    #[must_use]
    pub fn is_authentication_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Authentication)
    }

    /// True for 400 responses.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Validation)
    }

    /// True for 404 responses.
    #[must_use]
    pub fn is_not_found_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::NotFound)
    }

    /// True for 429 responses.
    #[must_use]
    pub fn is_rate_limit_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::RateLimit)
    }

    /// True for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Server)
    }
}

impl From<HttpError> for BagelPayError {
    fn from(e: HttpError) -> Self {
        Self::local_with("request failed", e)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
