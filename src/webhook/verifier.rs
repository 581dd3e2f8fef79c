//! Stateful webhook verification with an optional replay window.

use std::fmt;
use std::time::Duration;

use subtle::ConstantTimeEq;

use crate::time::{Clock, SystemClock};

use super::{WebhookError, WebhookEvent, compute_signature};

/// Verifies deliveries for one webhook endpoint.
///
/// Without a tolerance only the signature is checked. With one, the
/// timestamp must also lie within `tolerance` of the clock, in either
/// direction, which bounds how long a captured delivery can be replayed.
///
/// # Type Parameters
///
/// - `C`: Source of the current time (defaults to [`SystemClock`])
#[derive(Clone)]
pub struct WebhookVerifier<C = SystemClock> {
    secret: String,
    tolerance: Option<Duration>,
    clock: C,
}

impl WebhookVerifier<SystemClock> {
    /// Creates a verifier for `secret` with no replay window.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            tolerance: None,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> WebhookVerifier<C> {
    /// Rejects timestamps further than `tolerance` from now.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Replaces the clock used for the replay window.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> WebhookVerifier<C2> {
        WebhookVerifier {
            secret: self.secret,
            tolerance: self.tolerance,
            clock,
        }
    }

    /// Returns the configured replay window, if any.
    #[must_use]
    pub const fn tolerance(&self) -> Option<Duration> {
        self.tolerance
    }

    /// Returns true if the delivery is authentic and, when a tolerance is
    /// set, fresh.
    #[must_use]
    pub fn verify(&self, body: &[u8], timestamp: &str, signature: &str) -> bool {
        self.check(body, timestamp, signature).is_ok()
    }

    /// Like [`verify`](Self::verify), but reports why a delivery failed.
    ///
    /// The timestamp window is checked before the signature.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidTimestamp`] or
    ///   [`WebhookError::OutsideTolerance`] when the window rejects the
    ///   timestamp
    /// - [`WebhookError::InvalidSignature`] on a signature mismatch
    pub fn check(&self, body: &[u8], timestamp: &str, signature: &str) -> Result<(), WebhookError> {
        if let Some(tolerance) = self.tolerance {
            self.check_window(timestamp, tolerance)?;
        }

        let expected = compute_signature(&self.secret, timestamp, body)?;
        if bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            Ok(())
        } else {
            tracing::debug!(
                expected_len = expected.len(),
                actual_len = signature.len(),
                "Webhook signature mismatch"
            );
            Err(WebhookError::InvalidSignature)
        }
    }

    /// Verifies the delivery, then parses its body.
    ///
    /// # Errors
    ///
    /// Any error from [`check`](Self::check) or [`WebhookEvent::parse`].
    pub fn verify_and_parse(
        &self,
        body: &[u8],
        timestamp: &str,
        signature: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        self.check(body, timestamp, signature)?;
        WebhookEvent::parse(body)
    }

    fn check_window(&self, timestamp: &str, tolerance: Duration) -> Result<(), WebhookError> {
        let sent: u64 = timestamp
            .trim()
            .parse()
            .map_err(|_| WebhookError::InvalidTimestamp(timestamp.to_string()))?;

        let skew_secs = self.clock.unix_secs().abs_diff(sent);
        if skew_secs > tolerance.as_secs() {
            return Err(WebhookError::OutsideTolerance {
                skew_secs,
                tolerance_secs: tolerance.as_secs(),
            });
        }
        Ok(())
    }
}

impl<C> fmt::Debug for WebhookVerifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"<redacted>")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}
