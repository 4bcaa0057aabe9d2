//! Results of liquidity operations and LP position views.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints};

/// Whether a receipt records a deposit or a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Assets deposited, shares minted.
    Add,
    /// Shares burned, assets paid out.
    Remove,
}

/// Amounts moved by a committed `add_liquidity` or `remove_liquidity`.
///
/// For [`ChangeKind::Add`], `amount_a`/`amount_b` were deposited and
/// `shares` minted. For [`ChangeKind::Remove`], `shares` were burned and
/// the amounts paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityReceipt {
    /// Deposit or withdrawal.
    pub kind: ChangeKind,
    /// Asset A moved.
    pub amount_a: Amount,
    /// Asset B moved.
    pub amount_b: Amount,
    /// Shares minted or burned.
    pub shares: Amount,
}

impl fmt::Display for LiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            ChangeKind::Add => "minted",
            ChangeKind::Remove => "burned",
        };
        write!(
            f,
            "{} shares {verb} for {} A + {} B",
            self.shares, self.amount_a, self.amount_b
        )
    }
}

/// A provider's claim on the pool at the current reserves.
///
/// `amount_a`/`amount_b` are what `remove_liquidity(shares)` would pay out
/// right now; `share_of_pool` is floored to whole basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LpPosition {
    /// Shares held.
    pub shares: Amount,
    /// Fraction of outstanding supply, in basis points.
    pub share_of_pool: BasisPoints,
    /// Redeemable asset A.
    pub amount_a: Amount,
    /// Redeemable asset B.
    pub amount_b: Amount,
}

impl LpPosition {
    /// Returns `true` if the owner holds no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shares.is_zero()
    }
}
