//! 256-bit intermediates for products of two `u128` amounts.
//!
//! Two 18-decimal amounts of a few hundred tokens already multiply past
//! `u128::MAX`, so every `a * b / c` and `sqrt(a * b)` in pool math runs
//! through [`U256`] and narrows back to [`Amount`] at the end. The product
//! of two `u128` values always fits in 256 bits; only the narrowing step
//! can fail.

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

#[allow(unsafe_code, missing_docs, clippy::all)]
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Returns the exact product `a * b`.
#[must_use]
pub fn full_mul(a: Amount, b: Amount) -> U256 {
    U256::from(a.get()) * U256::from(b.get())
}

/// Narrows a 256-bit value back to an [`Amount`].
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] with `what` if `value` does not
/// fit in `u128`.
pub fn narrow(value: U256, what: &'static str) -> Result<Amount, AmmError> {
    if value.bits() > 128 {
        return Err(AmmError::ArithmeticOverflow(what));
    }
    Ok(Amount::new(value.low_u128()))
}

/// Computes `a * b / denominator` with explicit rounding.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `denominator` is zero or the
/// quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, Rounding};
/// use simple_dex::math::mul_div;
///
/// let e18 = 10u128.pow(18);
/// // 100e18 * 200e18 overflows u128, the quotient does not.
/// let q = mul_div(
///     Amount::new(100 * e18),
///     Amount::new(200 * e18),
///     Amount::new(400 * e18),
///     Rounding::Down,
/// );
/// assert_eq!(q, Ok(Amount::new(50 * e18)));
/// ```
pub fn mul_div(
    a: Amount,
    b: Amount,
    denominator: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::ArithmeticOverflow("division by zero"));
    }
    let numerator = full_mul(a, b);
    let d = U256::from(denominator.get());
    let mut quotient = numerator / d;
    if rounding.is_up() && !(numerator % d).is_zero() {
        quotient = quotient + U256::one();
    }
    narrow(quotient, "mul_div result exceeds u128")
}

/// Integer square root of a 256-bit value, rounded down (Newton's method).
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let two = U256::from(2u8);
    let mut x = n;
    let mut y = x / two + x % two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

/// Computes `floor(sqrt(a * b))`, the geometric mean of two amounts.
///
/// Always fits in `u128` because `sqrt((2^128)^2) = 2^128`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] only if narrowing fails, which
/// the bound above rules out.
pub fn sqrt_product(a: Amount, b: Amount) -> Result<Amount, AmmError> {
    narrow(isqrt(full_mul(a, b)), "sqrt product exceeds u128")
}
