//! End-to-end walk through a simple-dex pool.
//!
//! Loads a pool configuration from JSON, funds two accounts, provides
//! liquidity, trades in both directions with a slippage guard, and prints
//! the statistics and the event feed an indexer would consume.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=simple_dex=debug cargo run --example simple_dex
//! ```

use simple_dex::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "pool_address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
    "asset_a": { "address": "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512", "name": "Token A", "symbol": "TKA" },
    "asset_b": { "address": "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0", "name": "Token B", "symbol": "TKB" }
}"#;

fn tokens(n: u64) -> Amount {
    Amount::from_whole(n, Decimals::MAX)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ── 1. Build the pool from configuration ────────────────────────────
    let config: PoolConfig = serde_json::from_str(CONFIG)?;
    let pool = Pool::with_clock(config, ManualClock::new(1_735_689_600))?;
    let pool_addr = pool.address();
    let share = pool.token_info(Asset::Share);
    println!("=== simple-dex ===");
    println!("Pool {pool_addr} issues {} ({})", share.name(), share.symbol());

    // ── 2. Genesis funding and approvals ────────────────────────────────
    let deployer: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse()?;
    let trader: Address = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".parse()?;
    for asset in [Asset::A, Asset::B] {
        pool.mint_asset(asset, deployer, tokens(1_000_000))?;
        pool.transfer(asset, deployer, trader, tokens(10_000))?;
        for who in [deployer, trader] {
            pool.approve(asset, who, pool_addr, Amount::MAX)?;
        }
    }

    // ── 3. Provide liquidity ────────────────────────────────────────────
    let first = pool.add_liquidity(deployer, tokens(100), tokens(200))?;
    println!("\nAdd liquidity: {first}");
    let b_needed = pool.quote_deposit(tokens(50), Asset::A)?;
    let second = pool.add_liquidity(trader, tokens(50), b_needed)?;
    println!("Balanced top-up: {second}");
    let (ra, rb) = pool.get_reserves();
    println!("Reserves: {ra} A / {rb} B, supply {}", pool.share_supply());

    // ── 4. Trade with a 0.5% slippage tolerance ─────────────────────────
    let amount_in = tokens(5);
    let quote = pool.get_amount_out(amount_in, true)?;
    let floor = min_amount_out(quote, BasisPoints::new(50))?;
    let swap = pool.swap_exact_in(trader, amount_in, SwapDirection::AToB, floor)?;
    println!("\nSwap: {swap}");

    let back = pool.swap_b_for_a(trader, swap.amount_out())?;
    println!("Swap back: {back}");

    // ── 5. Statistics ───────────────────────────────────────────────────
    let (vol_a, vol_b) = pool.get_volume_24h()?;
    println!("\n24h volume: {vol_a} A / {vol_b} B");
    println!("24h fees:   {}", pool.get_fees_24h()?);
    println!("24h swaps:  {}", pool.get_transactions_24h()?);
    let apr = pool.get_apr()?;
    println!("APR:        {}.{:02}%", apr / 100, apr % 100);
    println!("Providers:  {}", pool.get_liquidity_providers_count());

    let position = pool.position(trader)?;
    println!(
        "Trader position: {} shares ({}), redeemable {} A + {} B",
        position.shares, position.share_of_pool, position.amount_a, position.amount_b
    );

    // ── 6. Exit and show the event feed ─────────────────────────────────
    let exit = pool.remove_liquidity(trader, position.shares)?;
    println!("\nRemove liquidity: {exit}");

    println!("\nEvent feed:");
    for logged in pool.events_since(0) {
        println!("{}", serde_json::to_string(&logged)?);
    }
    println!("\nSnapshot: {:?}", pool.snapshot());
    Ok(())
}
