//! Token bookkeeping.
//!
//! A pool keeps one [`FungibleLedger`] per asset plus one for its
//! liquidity-share token.

mod fungible;

pub use fungible::FungibleLedger;
