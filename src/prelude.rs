//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use simple_dex::prelude::*;
//! ```

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::config::{PoolConfig, ShareTokenConfig};
pub use crate::domain::{
    Address, Amount, Asset, BasisPoints, Decimals, FeeTier, LiquidityReceipt, LpPosition,
    SwapDirection, SwapResult, TokenInfo,
};
pub use crate::error::{AmmError, Result};
pub use crate::events::{LoggedEvent, PoolEvent};
pub use crate::pool::{min_amount_out, Pool, PoolSnapshot};
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};
