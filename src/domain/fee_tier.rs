//! Swap fee charged on the input side of every trade.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};

/// A swap fee expressed in [`BasisPoints`] of the input amount.
///
/// The pool charges [`FeeTier::SWAP_FEE`] (0.30%). The fee is rounded up
/// so the amount that reaches the pricing formula is
/// `floor(amount_in * 9_970 / 10_000)`, which equals
/// `floor(amount_in * 997 / 1_000)`.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, FeeTier};
///
/// let split = FeeTier::SWAP_FEE.split(Amount::new(1_000)).expect("no overflow");
/// assert_eq!(split, (Amount::new(997), Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// The pool's fixed 0.30% swap fee (30 bp).
    pub const SWAP_FEE: Self = Self(BasisPoints::new(30));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Computes the fee retained from `amount_in`, rounded up.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
    /// if the intermediate multiplication overflows.
    pub const fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Up)
    }

    /// Splits `amount_in` into `(amount_after_fee, fee)`.
    ///
    /// # Errors
    ///
    /// Propagates overflow from [`fee_on`](Self::fee_on).
    pub fn split(&self, amount_in: Amount) -> crate::error::Result<(Amount, Amount)> {
        let fee = self.fee_on(amount_in)?;
        let after_fee = amount_in
            .checked_sub(&fee)
            .ok_or(crate::error::AmmError::ArithmeticOverflow("fee exceeds input"))?;
        Ok((after_fee, fee))
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::SWAP_FEE
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn swap_fee_is_thirty_bps() {
        assert_eq!(FeeTier::SWAP_FEE.basis_points().get(), 30);
        assert_eq!(FeeTier::default(), FeeTier::SWAP_FEE);
    }

    #[test]
    fn split_matches_997_over_1000() {
        for raw in [1u128, 2, 333, 334, 999, 1_000, 1_001, 123_456_789, 10u128.pow(20)] {
            let Ok((after_fee, fee)) = FeeTier::SWAP_FEE.split(Amount::new(raw)) else {
                panic!("split ok for {raw}");
            };
            assert_eq!(after_fee.get(), raw * 997 / 1_000, "after-fee for {raw}");
            assert_eq!(after_fee.get() + fee.get(), raw);
        }
    }

    #[test]
    fn tiny_input_is_all_fee() {
        let Ok((after_fee, fee)) = FeeTier::SWAP_FEE.split(Amount::new(1)) else {
            panic!("split ok");
        };
        assert_eq!(after_fee, Amount::ZERO);
        assert_eq!(fee, Amount::new(1));
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::SWAP_FEE.to_string(), "FeeTier(30bp)");
    }
}
