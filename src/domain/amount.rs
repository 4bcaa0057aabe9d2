//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Decimals, Rounding};
use crate::error::AmmError;

/// A raw token amount in the smallest unit (18 fractional digits for the
/// pool's default assets).
///
/// `Amount` never interprets decimals on its own; use
/// [`Amount::from_whole`] to scale a whole-token count. All `u128` values
/// are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking or wrapping.
///
/// Serialized as a decimal string, since 18-decimal values do not survive
/// a round trip through JSON numbers in most consumers.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Scales a whole-token count to raw units, e.g. `100` tokens with 18
    /// decimals becomes `100 * 10^18`.
    pub const fn from_whole(tokens: u64, decimals: Decimals) -> Self {
        Self(decimals.scale_up(tokens))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up => {
                if self.0 % divisor.0 != 0 {
                    // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        const INVALID: AmmError = AmmError::InvalidConfiguration("amount must be a decimal integer");
        // u128::from_str also takes a leading '+'
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(INVALID);
        }
        value.parse::<u128>().map(Self).map_err(|_| INVALID)
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
