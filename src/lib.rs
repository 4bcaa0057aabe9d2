//! # simple-dex
//!
//! Core of a two-asset constant-product exchange: reserve bookkeeping,
//! liquidity-share minting and burning, swap pricing with a 0.30% input
//! fee, daily trading statistics, and an append-only event log for an
//! off-chain indexer.
//!
//! ## Add liquidity and swap
//!
//! ```rust
//! use simple_dex::prelude::*;
//!
//! let pool_addr = Address::from_bytes([0xd0; 20]);
//! let config = PoolConfig::new(
//!     pool_addr,
//!     TokenInfo::new(Address::from_bytes([0xa0; 20]), "Token A", "TKA", Decimals::MAX),
//!     TokenInfo::new(Address::from_bytes([0xb0; 20]), "Token B", "TKB", Decimals::MAX),
//! )
//! .expect("valid config");
//! let pool = Pool::with_clock(config, ManualClock::new(1_735_689_600)).expect("pool");
//!
//! let alice = Address::from_bytes([1; 20]);
//! let e18 = Amount::from_whole(1, Decimals::MAX);
//! for asset in [Asset::A, Asset::B] {
//!     pool.mint_asset(asset, alice, Amount::from_whole(1_000, Decimals::MAX)).expect("fund");
//!     pool.approve(asset, alice, pool_addr, Amount::MAX).expect("approve");
//! }
//!
//! // 100 A + 200 B mints sqrt(100 * 200) ~ 141.42 shares
//! let receipt = pool
//!     .add_liquidity(alice, Amount::from_whole(100, Decimals::MAX), Amount::from_whole(200, Decimals::MAX))
//!     .expect("add liquidity");
//! assert_eq!(receipt.shares.get() / e18.get(), 141);
//!
//! let quote = pool.get_amount_out(Amount::from_whole(10, Decimals::MAX), true).expect("quote");
//! let swap = pool.swap_a_for_b(alice, Amount::from_whole(10, Decimals::MAX)).expect("swap");
//! assert_eq!(swap.amount_out(), quote);
//! assert_eq!(pool.get_transactions_24h(), Ok(1));
//! ```
//!
//! # Architecture
//!
//! ```text
//! caller ──► Pool ──(write lock, undo journal)──► PoolState
//!             │                                    ├─ FungibleLedger × 3 (A, B, shares)
//!             │                                    └─ StatsTracker (per UTC day)
//!             └──(on commit)──► EventLog ──► indexer (events_since)
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Address`](domain::Address), [`SwapResult`](domain::SwapResult), … |
//! | [`ledger`] | [`FungibleLedger`](ledger::FungibleLedger), ERC-20 style balances and allowances |
//! | [`pool`] | [`Pool`](pool::Pool) and the pure constant-product formulas |
//! | [`stats`] | [`StatsTracker`](stats::StatsTracker), day-bucketed volume and fees |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) and the append-only [`EventLog`](events::EventLog) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), serde-loadable pool parameters |
//! | [`clock`] | [`Clock`](clock::Clock) time sources |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`math`] | Checked and 256-bit arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) |
//! | [`prelude`] | Common re-exports |

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod stats;
pub mod traits;
