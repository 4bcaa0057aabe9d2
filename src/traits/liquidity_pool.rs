//! Liquidity provisioning on top of [`SwapPool`].
//!
//! Shares are the only claim on the reserves: they change through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`]
//! and nothing else. Swap fees stay in the reserves, so they accrue to
//! share holders without any explicit collection step.

use super::SwapPool;
use crate::domain::{Address, Amount, LiquidityReceipt, LpPosition};
use crate::error::AmmError;

/// A pool that mints and burns liquidity shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits both assets and mints shares to `caller`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the deposit mints no shares.
    /// - Ledger errors if the caller cannot fund the deposit.
    fn add_liquidity(
        &self,
        caller: Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt, AmmError>;

    /// Burns `shares` held by `caller` and pays out their claim.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer shares.
    fn remove_liquidity(&self, caller: Address, shares: Amount) -> Result<LiquidityReceipt, AmmError>;

    /// Outstanding shares.
    fn share_supply(&self) -> Amount;

    /// `owner`'s shares and their current redemption value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    fn position(&self, owner: Address) -> Result<LpPosition, AmmError>;
}
