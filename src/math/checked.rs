//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] into [`Result<Self, AmmError>`](crate::error::AmmError),
//! so ledger and stats code can propagate overflow with `?`.
//!
//! # Examples
//!
//! ```
//! use simple_dex::domain::Amount;
//! use simple_dex::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation or wrapping**: every failure is an
///   [`AmmError::ArithmeticOverflow`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::ArithmeticOverflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::ArithmeticOverflow("division by zero"))
    }
}
