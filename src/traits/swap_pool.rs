//! Swap execution and quoting.
//!
//! [`SwapPool`] is the trading surface of a pool: quote, execute, and
//! inspect reserves and fee. The fee is always taken from the input before
//! the pricing curve is applied:
//!
//! ```text
//! fee        = ceil(amount_in * fee_bps / 10_000)
//! after_fee  = amount_in - fee
//! amount_out = curve(after_fee)
//! ```

use crate::domain::{Address, Amount, FeeTier, SwapDirection, SwapResult};
use crate::error::AmmError;

/// Trading surface of a two-asset pool.
///
/// Methods take `&self`: implementations serialize mutations internally,
/// so one pool can be shared between threads behind an `Arc`.
pub trait SwapPool {
    /// Current `(reserve_a, reserve_b)`.
    fn reserves(&self) -> (Amount, Amount);

    /// Fee charged on every swap input.
    fn fee_tier(&self) -> FeeTier;

    /// Prices a swap without executing it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the reserves cannot pay a
    ///   non-zero output.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Executes an exact-input swap for `caller`.
    ///
    /// Either the whole swap happens or nothing does.
    ///
    /// # Errors
    ///
    /// The errors of [`quote`](Self::quote), plus
    /// [`AmmError::SlippageExceeded`] if the output is below
    /// `min_amount_out` and the ledger errors of moving the caller's input.
    fn swap(
        &self,
        caller: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError>;
}
