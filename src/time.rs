//! Time abstraction for testability.
//!
//! The webhook verifier reads "now" through a [`Clock`] so replay windows
//! can be tested without sleeping.

use std::time::{Duration, SystemTime};

/// Abstraction over system time.
///
/// # Example
///
/// ```
/// use bagelpay::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;

    /// Returns the current time as whole seconds since the Unix epoch.
    ///
    /// Times before the epoch read as zero.
    fn unix_secs(&self) -> u64 {
        self.now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at a single instant.
///
/// Useful when replaying captured webhook deliveries whose timestamps are
/// long past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(SystemTime);

impl FixedClock {
    /// A clock stopped at `time`.
    #[must_use]
    pub const fn new(time: SystemTime) -> Self {
        Self(time)
    }

    /// A clock stopped `secs` seconds after the Unix epoch.
    #[must_use]
    pub fn at_unix(secs: u64) -> Self {
        Self(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> SystemTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = SystemTime::now();
        let result = clock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
        assert_send_sync::<FixedClock>();
    }

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = FixedClock::at_unix(1_700_000_000);

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.unix_secs(), 1_700_000_000);
    }

    #[test]
    fn unix_secs_truncates_fractions() {
        let clock = FixedClock::new(SystemTime::UNIX_EPOCH + Duration::from_millis(2_999));

        assert_eq!(clock.unix_secs(), 2);
    }

    #[test]
    fn pre_epoch_reads_as_zero() {
        let clock = FixedClock::new(SystemTime::UNIX_EPOCH - Duration::from_secs(10));

        assert_eq!(clock.unix_secs(), 0);
    }

    #[test]
    fn references_are_clocks() {
        let clock = FixedClock::at_unix(5);
        let by_ref: &FixedClock = &clock;

        assert_eq!(Clock::unix_secs(&by_ref), 5);
    }
}
