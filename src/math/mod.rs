//! Overflow-checked arithmetic for pool math.
//!
//! [`CheckedArithmetic`] turns domain `checked_*` results into
//! [`AmmError`](crate::error::AmmError)s; the [`wide`] helpers compute
//! products of two amounts in 256 bits so that 18-decimal reserves never
//! overflow mid-formula.

mod checked;
pub mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{full_mul, isqrt, mul_div, sqrt_product, U256};
