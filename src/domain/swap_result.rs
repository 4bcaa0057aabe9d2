//! Outcome of a swap operation.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// The outcome of a committed swap, or of a quote.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, SwapDirection, SwapResult};
///
/// let r = SwapResult::new(SwapDirection::AToB, Amount::new(1000), Amount::new(990), Amount::new(3));
/// assert!(r.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is zero or
    ///   `fee >= amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if amount_out.is_zero() || fee.get() >= amount_in.get() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount paid to the caller.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee retained by the pool, in input-asset units.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the input amount that reached the pricing formula.
    pub const fn amount_after_fee(&self) -> Amount {
        Amount::new(self.amount_in.get() - self.fee.get())
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({} in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
