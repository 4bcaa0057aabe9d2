//! Time sources for stamping events and bucketing daily statistics.
//!
//! The pool never reads the system time directly; it asks its [`Clock`].
//! Production code uses [`SystemClock`], tests and simulations use a
//! [`ManualClock`] they can move forward by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AmmError;

/// Seconds in one UTC statistics day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Returns the UTC day index of a Unix timestamp.
#[must_use]
pub const fn day_index(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

/// Returns the calendar date of a day index, or `None` if it lies outside
/// the range `chrono` can represent.
///
/// ```
/// use chrono::NaiveDate;
/// use simple_dex::clock::day_date;
///
/// assert_eq!(day_date(0), NaiveDate::from_ymd_opt(1970, 1, 1));
/// assert_eq!(day_date(20_089), NaiveDate::from_ymd_opt(2025, 1, 1));
/// ```
#[must_use]
pub fn day_date(day: u64) -> Option<NaiveDate> {
    let secs = i64::try_from(day.checked_mul(SECONDS_PER_DAY)?).ok()?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

/// Source of the current Unix time in seconds.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Clock`] if the time cannot be expressed as
    /// seconds since the Unix epoch.
    fn now(&self) -> Result<u64, AmmError>;

    /// Current UTC day index.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`now`](Self::now).
    fn today(&self) -> Result<u64, AmmError> {
        self.now().map(day_index)
    }
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<u64, AmmError> {
        u64::try_from(Utc::now().timestamp())
            .map_err(|_| AmmError::Clock("system time is before the unix epoch"))
    }
}

/// Hand-driven clock for tests and simulations.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and advance the clock a pool was built with.
///
/// ```
/// use simple_dex::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
/// handle.advance(86_400);
/// assert_eq!(clock.now(), Ok(87_400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at `timestamp`.
    #[must_use]
    pub fn new(timestamp: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(timestamp)),
        }
    }

    /// Moves the clock forward by `seconds`, saturating at `u64::MAX`.
    pub fn advance(&self, seconds: u64) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(seconds))
            });
    }

    /// Jumps to an absolute timestamp.
    pub fn set(&self, timestamp: u64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Result<u64, AmmError> {
        Ok(self.now.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Result<u64, AmmError> {
        (**self).now()
    }
}
