//! The constant-product pool.
//!
//! # Swap algorithm (A → B)
//!
//! 1. `fee = ceil(amount_in * 30 / 10_000)`
//! 2. `after_fee = amount_in - fee`, equal to `floor(amount_in * 997 / 1000)`
//! 3. `amount_out = floor(after_fee * reserve_b / (reserve_a + after_fee))`
//! 4. `reserve_a += amount_in` (the fee stays in the pool)
//! 5. `reserve_b -= amount_out`
//!
//! Because the fee enters the reserves without a matching output,
//! `reserve_a * reserve_b` strictly grows on every swap.

mod math;
#[allow(clippy::module_inception)]
mod pool;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use math::{min_amount_out, mint_shares, quote_deposit, quote_swap, redeem, share_of_pool};
pub use pool::Pool;
pub use state::{PoolSnapshot, PoolState};
