//! Client configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::defaults;

/// Which BagelPay environment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Sandbox environment; no real money moves
    #[default]
    Test,
    /// Production environment
    Live,
}

impl Mode {
    /// Base URL of this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Test => defaults::TEST_BASE_URL,
            Self::Live => defaults::LIVE_BASE_URL,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" | "sandbox" => Ok(Self::Test),
            "live" | "production" | "prod" => Ok(Self::Live),
            _ => Err(format!("Invalid mode '{s}': expected test or live")),
        }
    }
}

/// Configuration for [`BagelPayClient`](super::BagelPayClient).
///
/// The API key is mandatory; there is no fallback key. An explicit base
/// URL wins over the mode's URL. A blank base URL or a zero timeout counts
/// as unset.
///
/// # Example
///
/// ```
/// use bagelpay::client::{ClientConfig, Mode};
/// use std::time::Duration;
///
/// let config = ClientConfig::new("bagel_test_key")
///     .with_mode(Mode::Live)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url(), "https://live.bagelpay.io");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    /// Environment used when no base URL override is set
    pub mode: Mode,
    /// Explicit base URL, overriding `mode`
    pub base_url: Option<String>,
    /// Per-request timeout; zero means the default
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a test-mode configuration with the default timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mode: Mode::Test,
            base_url: None,
            timeout: defaults::timeout(),
        }
    }

    /// Sets the environment.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Resolves the base URL: the override if set and not blank, otherwise
    /// the mode's URL, with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.mode.base_url())
            .trim_end_matches('/')
    }

    /// Resolves the request timeout, treating zero as unset.
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            defaults::timeout()
        } else {
            self.timeout
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &mask_key(&self.api_key))
            .field("mode", &self.mode)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Masks an API key for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
