//! Property-based tests for pool invariants.
//!
//! 1. **Swap reversibility**: a round trip A→B→A returns at most the input.
//! 2. **k growth**: `reserve_a * reserve_b` strictly grows on every swap.
//! 3. **Fee monotonicity**: a larger input never pays a smaller fee.
//! 4. **Liquidity conservation**: add then remove returns at most the deposit.
//! 5. **Bookkeeping**: reserves always equal the pool's ledger balances.
//! 6. **Rollback**: a rejected operation leaves the pool untouched.

use proptest::prelude::*;

use super::math::quote_swap;
use super::Pool;
use crate::clock::ManualClock;
use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Asset, Decimals, SwapDirection, TokenInfo};
use crate::error::AmmError;
use crate::math::full_mul;

const POOL: Address = Address::from_bytes([0xd0; 20]);
const LP: Address = Address::from_bytes([1; 20]);
const TRADER: Address = Address::from_bytes([2; 20]);

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(ra: u128, rb: u128) -> Pool<ManualClock> {
    let a = TokenInfo::new(Address::from_bytes([0xa0; 20]), "Token A", "TKA", Decimals::MAX);
    let b = TokenInfo::new(Address::from_bytes([0xb0; 20]), "Token B", "TKB", Decimals::MAX);
    let Ok(cfg) = PoolConfig::new(POOL, a, b) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::with_clock(cfg, ManualClock::new(1_700_000_000)) else {
        panic!("pool");
    };
    for who in [LP, TRADER] {
        for asset in [Asset::A, Asset::B] {
            let Ok(()) = pool.mint_asset(asset, who, Amount::new(u128::MAX / 4)) else {
                panic!("fund");
            };
            let Ok(()) = pool.approve(asset, who, POOL, Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    let Ok(_) = pool.add_liquidity(LP, Amount::new(ra), Amount::new(rb)) else {
        panic!("seed liquidity");
    };
    pool
}

fn is_consistent(pool: &Pool<ManualClock>) -> bool {
    let (ra, rb) = pool.get_reserves();
    ra == pool.balance_of(Asset::A, POOL) && rb == pool.balance_of(Asset::B, POOL)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves from dust to a billion 18-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1_000u128..=1_000_000u128,
        1_000_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000u128,
    ]
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_flag)
}

// ---------------------------------------------------------------------------
// Swap properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 10u128..=10_000u128,
    ) {
        let pool = make_pool(ra, rb);
        let swap_in = (ra / divisor).max(1);
        let Ok(there) = pool.swap_a_for_b(TRADER, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(back) = pool.swap_b_for_a(TRADER, there.amount_out()) else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round trip gained value: {} > {}",
            back.amount_out(), swap_in
        );
    }

    #[test]
    fn prop_k_strictly_grows(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 2u128..=100_000u128,
        direction in direction_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let (before_a, before_b) = pool.get_reserves();
        let reserve_in = if direction.is_a_for_b() { before_a } else { before_b };
        let amount_in = (reserve_in.get() / divisor).max(1);
        let Ok(_) = pool.swap_exact_in(TRADER, Amount::new(amount_in), direction, Amount::ZERO) else {
            return Ok(());
        };
        let (after_a, after_b) = pool.get_reserves();
        prop_assert!(full_mul(after_a, after_b) > full_mul(before_a, before_b));
    }

    #[test]
    fn prop_fee_monotonicity(
        reserve in reserve_strategy(),
        small in 1u128..=1_000_000u128,
        extra in 0u128..=1_000_000u128,
    ) {
        let r = Amount::new(reserve);
        let q_small = quote_swap(SwapDirection::AToB, Amount::new(small), r, r);
        let q_large = quote_swap(SwapDirection::AToB, Amount::new(small + extra), r, r);
        if let (Ok(s), Ok(l)) = (q_small, q_large) {
            prop_assert!(l.fee() >= s.fee());
            prop_assert!(l.amount_out() >= s.amount_out());
        }
    }
}

// ---------------------------------------------------------------------------
// Liquidity properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_conservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in reserve_strategy(),
        db in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let Ok(added) = pool.add_liquidity(TRADER, Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(removed) = pool.remove_liquidity(TRADER, added.shares) else {
            return Ok(());
        };
        prop_assert!(removed.amount_a <= added.amount_a);
        prop_assert!(removed.amount_b <= added.amount_b);
        prop_assert!(is_consistent(&pool));
    }

    #[test]
    fn prop_bookkeeping_after_mixed_ops(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec((0u8..4, 1u128..=1_000_000_000_000_000_000_000u128), 1..20),
    ) {
        let pool = make_pool(ra, rb);
        for (kind, amount) in ops {
            let amount = Amount::new(amount);
            let _ = match kind {
                0 => pool.swap_a_for_b(TRADER, amount).map(|_| ()),
                1 => pool.swap_b_for_a(TRADER, amount).map(|_| ()),
                2 => pool.add_liquidity(TRADER, amount, amount).map(|_| ()),
                _ => {
                    let held = pool.balance_of(Asset::Share, TRADER);
                    pool.remove_liquidity(TRADER, held.min(amount)).map(|_| ())
                }
            };
            prop_assert!(is_consistent(&pool));
            let snap = pool.snapshot();
            prop_assert!(!snap.reserve_a.is_zero() && !snap.reserve_b.is_zero());
            prop_assert!(!snap.share_supply.is_zero());
        }
    }

    #[test]
    fn prop_rejected_swap_rolls_back(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let before = pool.snapshot();
        let events_before = pool.events().len();
        let result = pool.swap_exact_in(TRADER, Amount::new(ra), direction, Amount::MAX);
        let rejected = matches!(
            result,
            Err(AmmError::SlippageExceeded { .. } | AmmError::InsufficientLiquidity)
        );
        prop_assert!(rejected);
        prop_assert_eq!(pool.snapshot(), before);
        prop_assert_eq!(pool.events().len(), events_before);
    }
}
