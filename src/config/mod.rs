//! Pool configuration.
//!
//! A [`PoolConfig`] describes everything fixed at pool genesis. Pools are
//! built from it through [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::{PoolConfig, ShareTokenConfig};
