//! Value types shared by ledgers, pool math, statistics and events.
//!
//! All types are newtypes or plain records with validated constructors;
//! none of them holds mutable pool state.

mod address;
mod amount;
mod asset;
mod basis_points;
mod decimals;
mod fee_tier;
mod liquidity_receipt;
mod rounding;
mod swap_result;
mod token_info;

pub use address::Address;
pub use amount::Amount;
pub use asset::{Asset, SwapDirection};
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use liquidity_receipt::{ChangeKind, LiquidityReceipt, LpPosition};
pub use rounding::Rounding;
pub use swap_result::SwapResult;
pub use token_info::TokenInfo;
