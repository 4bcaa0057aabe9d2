//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for the swap fee, slippage tolerances and share-of-pool figures.
/// Values above 10 000 are representable but not valid percentages; see
/// [`is_valid_percent`](Self::is_valid_percent).
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.apply(Amount::new(1_000), Rounding::Up), Ok(Amount::new(3)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 - self`, the share left after taking this percentage.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the value exceeds 100%.
    pub const fn complement(&self) -> crate::error::Result<Self> {
        if self.0 > MAX_BPS {
            return Err(AmmError::InvalidConfiguration("basis points exceed 100%"));
        }
        Ok(Self(MAX_BPS - self.0))
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the intermediate
    /// multiplication overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::ArithmeticOverflow("basis points apply")),
        };
        match Amount::new(product).checked_div(&Amount::new(MAX_BPS as u128), rounding) {
            Some(v) => Ok(v),
            None => Err(AmmError::ArithmeticOverflow("basis points divisor")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
