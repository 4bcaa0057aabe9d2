//! Everything a pool owns, and the undo journal of an operation in
//! progress.

use serde::{Deserialize, Serialize};

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Asset};
use crate::ledger::FungibleLedger;
use crate::stats::{StatsCheckpoint, StatsTracker};

/// Reserves, the three ledgers and the statistics of one pool.
///
/// Outside of an operation in progress, `reserve_a` equals the pool
/// account's balance in `asset_a` (likewise for B), and either all of
/// reserves and share supply are zero or all are positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    address: Address,
    pub(crate) reserve_a: Amount,
    pub(crate) reserve_b: Amount,
    pub(crate) asset_a: FungibleLedger,
    pub(crate) asset_b: FungibleLedger,
    pub(crate) shares: FungibleLedger,
    pub(crate) stats: StatsTracker,
}

impl PoolState {
    /// Genesis state: empty ledgers and zero reserves.
    #[must_use]
    pub fn genesis(config: &PoolConfig) -> Self {
        Self {
            address: config.pool_address(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            asset_a: FungibleLedger::new(config.asset_a().clone()),
            asset_b: FungibleLedger::new(config.asset_b().clone()),
            shares: FungibleLedger::new(config.share_token()),
            stats: StatsTracker::new(),
        }
    }

    /// The pool's own account.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Outstanding liquidity shares.
    pub const fn share_supply(&self) -> Amount {
        self.shares.total_supply()
    }

    /// Ledger of `asset`.
    #[must_use]
    pub const fn ledger(&self, asset: Asset) -> &FungibleLedger {
        match asset {
            Asset::A => &self.asset_a,
            Asset::B => &self.asset_b,
            Asset::Share => &self.shares,
        }
    }

    pub(crate) fn ledger_mut(&mut self, asset: Asset) -> &mut FungibleLedger {
        match asset {
            Asset::A => &mut self.asset_a,
            Asset::B => &mut self.asset_b,
            Asset::Share => &mut self.shares,
        }
    }

    /// Reserve of a tradable asset; zero for [`Asset::Share`].
    pub const fn reserve(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
            Asset::Share => Amount::ZERO,
        }
    }

    pub(crate) fn set_reserve(&mut self, asset: Asset, amount: Amount) {
        match asset {
            Asset::A => self.reserve_a = amount,
            Asset::B => self.reserve_b = amount,
            Asset::Share => {}
        }
    }

    /// Daily statistics.
    #[must_use]
    pub const fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Returns `true` if reserves match the pool's ledger balances and the
    /// empty/non-empty states of reserves and supply agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let balances_match = self.reserve_a == self.asset_a.balance_of(&self.address)
            && self.reserve_b == self.asset_b.balance_of(&self.address);
        let supply = self.share_supply();
        let emptiness_agrees = if supply.is_zero() {
            self.reserve_a.is_zero() && self.reserve_b.is_zero()
        } else {
            !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
        };
        balances_match && emptiness_agrees
    }
}

/// Prior value of one entry an operation in progress has touched.
#[derive(Debug, Clone, Copy)]
enum Undo {
    Balance {
        asset: Asset,
        owner: Address,
        previous: Amount,
    },
    Allowance {
        asset: Asset,
        owner: Address,
        spender: Address,
        previous: Amount,
    },
    Supply {
        asset: Asset,
        previous: Amount,
    },
    Reserve {
        asset: Asset,
        previous: Amount,
    },
    Stats(StatsCheckpoint),
}

/// Entries touched by an operation in progress, recorded before each write.
///
/// Replaying the journal newest-first puts every touched entry back, so a
/// failed operation costs only as much as what it touched.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    entries: Vec<Undo>,
}

impl Journal {
    pub(crate) fn balance(&mut self, state: &PoolState, asset: Asset, owner: Address) {
        self.entries.push(Undo::Balance {
            asset,
            owner,
            previous: state.ledger(asset).balance_of(&owner),
        });
    }

    pub(crate) fn allowance(&mut self, state: &PoolState, asset: Asset, owner: Address, spender: Address) {
        self.entries.push(Undo::Allowance {
            asset,
            owner,
            spender,
            previous: state.ledger(asset).allowance(&owner, &spender),
        });
    }

    pub(crate) fn supply(&mut self, state: &PoolState, asset: Asset) {
        self.entries.push(Undo::Supply {
            asset,
            previous: state.ledger(asset).total_supply(),
        });
    }

    pub(crate) fn reserve(&mut self, state: &PoolState, asset: Asset) {
        self.entries.push(Undo::Reserve {
            asset,
            previous: state.reserve(asset),
        });
    }

    pub(crate) fn stats(&mut self, state: &PoolState, day: u64) {
        self.entries.push(Undo::Stats(state.stats.checkpoint(day)));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl PoolState {
    /// Puts back every entry recorded in `journal`.
    pub(crate) fn rollback(&mut self, journal: Journal) {
        for undo in journal.entries.into_iter().rev() {
            match undo {
                Undo::Balance {
                    asset,
                    owner,
                    previous,
                } => self.ledger_mut(asset).restore_balance(owner, previous),
                Undo::Allowance {
                    asset,
                    owner,
                    spender,
                    previous,
                } => self.ledger_mut(asset).restore_allowance(owner, spender, previous),
                Undo::Supply { asset, previous } => self.ledger_mut(asset).restore_supply(previous),
                Undo::Reserve { asset, previous } => self.set_reserve(asset, previous),
                Undo::Stats(checkpoint) => self.stats.restore(checkpoint),
            }
        }
    }
}

/// A consistent copy of a pool's headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Asset A held by the pool.
    pub reserve_a: Amount,
    /// Asset B held by the pool.
    pub reserve_b: Amount,
    /// Outstanding liquidity shares.
    pub share_supply: Amount,
    /// Owners with a non-zero share balance.
    pub liquidity_providers: usize,
    /// Fees collected since genesis.
    pub total_fees_collected: Amount,
    /// Sequence number the next event will get.
    pub next_event_seq: u64,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, TokenInfo};

    fn config() -> PoolConfig {
        let a = TokenInfo::new(Address::from_bytes([0xa; 20]), "Token A", "TKA", Decimals::MAX);
        let b = TokenInfo::new(Address::from_bytes([0xb; 20]), "Token B", "TKB", Decimals::MAX);
        let Ok(cfg) = PoolConfig::new(Address::from_bytes([0xd; 20]), a, b) else {
            panic!("valid config");
        };
        cfg
    }

    #[test]
    fn genesis_is_empty_and_consistent() {
        let s = PoolState::genesis(&config());
        assert_eq!(s.reserves(), (Amount::ZERO, Amount::ZERO));
        assert_eq!(s.share_supply(), Amount::ZERO);
        assert_eq!(s.ledger(Asset::Share).info().symbol(), "LPT");
        assert_eq!(s.ledger(Asset::B).info().symbol(), "TKB");
        assert!(s.is_consistent());
    }

    #[test]
    fn rollback_replays_newest_first() {
        let mut s = PoolState::genesis(&config());
        let lp = Address::from_bytes([1; 20]);
        let Ok(()) = s.ledger_mut(Asset::A).mint(lp, Amount::new(100)) else {
            panic!("mint");
        };
        let before = s.clone();

        let mut journal = Journal::default();
        for amount in [40, 70] {
            journal.balance(&s, Asset::A, lp);
            journal.supply(&s, Asset::A);
            let Ok(()) = s.ledger_mut(Asset::A).mint(lp, Amount::new(amount)) else {
                panic!("mint");
            };
        }
        journal.reserve(&s, Asset::B);
        s.set_reserve(Asset::B, Amount::new(9));
        assert_eq!(journal.len(), 5);

        s.rollback(journal);
        assert_eq!(s, before);
    }

    #[test]
    fn reserve_without_balance_is_inconsistent() {
        let mut s = PoolState::genesis(&config());
        s.set_reserve(Asset::A, Amount::new(5));
        assert_eq!(s.reserve(Asset::A), Amount::new(5));
        assert!(!s.is_consistent());
    }
}
