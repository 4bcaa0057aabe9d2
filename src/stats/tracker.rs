//! Day-bucketed swap statistics.

use std::collections::BTreeMap;

use tracing::debug;

use super::DailyStats;
use crate::domain::{Amount, Rounding, SwapDirection};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};

/// `365 days * 10_000`, so the APR comes out in hundredths of a percent.
const APR_FACTOR: Amount = Amount::new(3_650_000);

/// Per-day volume, fee and transaction counters.
///
/// The "24h" figures read the bucket of the current UTC day; they reset at
/// midnight rather than sliding. Buckets of past days are never modified:
/// a swap stamped with a day earlier than the newest bucket is folded into
/// the newest bucket instead.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, SwapDirection};
/// use simple_dex::stats::StatsTracker;
///
/// let mut stats = StatsTracker::new();
/// stats
///     .record_swap(19_000, Amount::new(1000), Amount::new(990), Amount::new(3), SwapDirection::AToB)
///     .expect("record");
/// assert_eq!(stats.volume_24h(19_000), (Amount::new(1000), Amount::ZERO));
/// assert_eq!(stats.transactions_24h(19_001), 0);
/// ```
/// The bucket and running total a single [`StatsTracker::record_swap`]
/// may change, as they were before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatsCheckpoint {
    day: u64,
    bucket: Option<DailyStats>,
    total_fees_collected: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTracker {
    days: BTreeMap<u64, DailyStats>,
    total_fees_collected: Amount,
}

impl StatsTracker {
    /// Creates a tracker with no buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one swap into the bucket for `day` and returns the updated
    /// bucket.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if a counter would overflow;
    /// the tracker is left unchanged.
    pub fn record_swap(
        &mut self,
        day: u64,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        direction: SwapDirection,
    ) -> Result<DailyStats, AmmError> {
        let day = self.bucket_for(day);
        let current = self
            .days
            .get(&day)
            .copied()
            .unwrap_or_else(|| DailyStats::empty(day));
        let next = current.with_swap(direction, amount_in, fee)?;
        let total = self.total_fees_collected.safe_add(&fee)?;

        self.days.insert(day, next);
        self.total_fees_collected = total;
        debug!(day, %direction, %amount_in, %amount_out, %fee, tx_count = next.tx_count, "swap recorded");
        Ok(next)
    }

    /// Bucket a swap stamped `day` lands in: `day` itself, or the newest
    /// bucket if `day` is older.
    fn bucket_for(&self, day: u64) -> u64 {
        self.latest_day().map_or(day, |latest| day.max(latest))
    }

    /// Captures what [`record_swap`](Self::record_swap) for `day` could
    /// overwrite.
    pub(crate) fn checkpoint(&self, day: u64) -> StatsCheckpoint {
        let day = self.bucket_for(day);
        StatsCheckpoint {
            day,
            bucket: self.days.get(&day).copied(),
            total_fees_collected: self.total_fees_collected,
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: StatsCheckpoint) {
        match checkpoint.bucket {
            Some(bucket) => self.days.insert(checkpoint.day, bucket),
            None => self.days.remove(&checkpoint.day),
        };
        self.total_fees_collected = checkpoint.total_fees_collected;
    }

    /// Bucket for `day`, if any swap happened that day.
    #[must_use]
    pub fn day(&self, day: u64) -> Option<&DailyStats> {
        self.days.get(&day)
    }

    /// All buckets in ascending day order.
    pub fn days(&self) -> impl Iterator<Item = &DailyStats> {
        self.days.values()
    }

    /// Newest bucket's day index.
    #[must_use]
    pub fn latest_day(&self) -> Option<u64> {
        self.days.keys().next_back().copied()
    }

    /// `(volume_a, volume_b)` of `today`.
    pub fn volume_24h(&self, today: u64) -> (Amount, Amount) {
        self.day(today)
            .map_or((Amount::ZERO, Amount::ZERO), |s| (s.volume_a, s.volume_b))
    }

    /// Fees collected on `today`.
    pub fn fees_24h(&self, today: u64) -> Amount {
        self.day(today).map_or(Amount::ZERO, |s| s.fees_collected)
    }

    /// Swaps executed on `today`.
    #[must_use]
    pub fn transactions_24h(&self, today: u64) -> u64 {
        self.day(today).map_or(0, |s| s.tx_count)
    }

    /// Fees collected since the pool was created.
    pub const fn total_fees_collected(&self) -> Amount {
        self.total_fees_collected
    }

    /// Annualised fee yield in basis points (hundredths of a percent):
    /// `floor(fees_today * 365 * 10_000 / total_liquidity)`, or `0` when
    /// `total_liquidity` is zero. `547` reads as 5.47%.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds `u128`.
    pub fn apr(&self, today: u64, total_liquidity: Amount) -> Result<u128, AmmError> {
        if total_liquidity.is_zero() {
            return Ok(0);
        }
        mul_div(self.fees_24h(today), APR_FACTOR, total_liquidity, Rounding::Down).map(|a| a.get())
    }
}
