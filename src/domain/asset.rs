//! Ledger selectors and swap direction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Selects one of the three ledgers a pool owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    /// First tradable asset.
    A,
    /// Second tradable asset.
    B,
    /// Liquidity-share token.
    Share,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
            Self::Share => f.write_str("share"),
        }
    }
}

/// Direction of a swap.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Asset, SwapDirection};
///
/// let dir = SwapDirection::from_flag(true);
/// assert_eq!(dir, SwapDirection::AToB);
/// assert_eq!((dir.input(), dir.output()), (Asset::A, Asset::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Maps the `is_a_for_b` flag of the public quoting surface.
    #[must_use]
    pub const fn from_flag(is_a_for_b: bool) -> Self {
        if is_a_for_b {
            Self::AToB
        } else {
            Self::BToA
        }
    }

    /// Returns `true` for [`SwapDirection::AToB`].
    #[must_use]
    pub const fn is_a_for_b(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// The asset the caller sells.
    #[must_use]
    pub const fn input(&self) -> Asset {
        match self {
            Self::AToB => Asset::A,
            Self::BToA => Asset::B,
        }
    }

    /// The asset the caller receives.
    #[must_use]
    pub const fn output(&self) -> Asset {
        match self {
            Self::AToB => Asset::B,
            Self::BToA => Asset::A,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => f.write_str("A->B"),
            Self::BToA => f.write_str("B->A"),
        }
    }
}
