//! HMAC-SHA256 webhook signatures.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex signature of `body` delivered at `timestamp`.
///
/// The signed message is the timestamp, a `.`, then the raw body bytes.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSecret`] if the secret cannot key the MAC.
pub fn compute_signature(secret: &str, timestamp: &str, body: &[u8]) -> Result<String, WebhookError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Returns true if `signature` is the signature of `body` at `timestamp`
/// under `secret`.
///
/// The comparison runs in constant time over the hex text, so any altered
/// character, including a change of letter case, fails verification.
#[must_use]
pub fn verify_signature(body: &[u8], timestamp: &str, signature: &str, secret: &str) -> bool {
    compute_signature(secret, timestamp, body)
        .is_ok_and(|expected| expected.as_bytes().ct_eq(signature.as_bytes()).into())
}
