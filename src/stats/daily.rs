//! One UTC day of trading activity.

use serde::{Deserialize, Serialize};

use crate::clock::day_date;
use crate::domain::{Amount, SwapDirection};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Cumulative swap activity for one UTC day.
///
/// Volumes are counted in the asset sold: an A→B swap adds its input to
/// `volume_a`, a B→A swap to `volume_b`. `fees_collected` sums the input
/// fee of both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day index, `timestamp / 86_400`.
    pub day: u64,
    /// Asset A sold into the pool.
    pub volume_a: Amount,
    /// Asset B sold into the pool.
    pub volume_b: Amount,
    /// Fees retained in the reserves.
    pub fees_collected: Amount,
    /// Number of swaps.
    pub tx_count: u64,
}

impl DailyStats {
    /// An empty bucket for `day`.
    #[must_use]
    pub const fn empty(day: u64) -> Self {
        Self {
            day,
            volume_a: Amount::ZERO,
            volume_b: Amount::ZERO,
            fees_collected: Amount::ZERO,
            tx_count: 0,
        }
    }

    /// Calendar date of the bucket.
    #[must_use]
    pub fn date(&self) -> Option<chrono::NaiveDate> {
        day_date(self.day)
    }

    /// Returns the bucket with one more swap folded in.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if a counter would overflow.
    pub fn with_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        fee: Amount,
    ) -> Result<Self, AmmError> {
        let mut next = *self;
        match direction {
            SwapDirection::AToB => next.volume_a = self.volume_a.safe_add(&amount_in)?,
            SwapDirection::BToA => next.volume_b = self.volume_b.safe_add(&amount_in)?,
        }
        next.fees_collected = self.fees_collected.safe_add(&fee)?;
        next.tx_count = self
            .tx_count
            .checked_add(1)
            .ok_or(AmmError::ArithmeticOverflow("daily transaction count overflow"))?;
        Ok(next)
    }
}
