//! Trait seams of a pool.
//!
//! [`SwapPool`] covers trading, [`LiquidityPool`] adds share minting and
//! burning, and [`FromConfig`] builds a pool from its configuration.

mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
