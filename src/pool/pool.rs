//! The pool: serialized, all-or-nothing operations over [`PoolState`].

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::math;
use super::state::{Journal, PoolSnapshot, PoolState};
use crate::clock::{day_index, Clock, SystemClock};
use crate::config::PoolConfig;
use crate::domain::{
    Address, Amount, Asset, ChangeKind, FeeTier, LiquidityReceipt, LpPosition, SwapDirection,
    SwapResult, TokenInfo,
};
use crate::error::AmmError;
use crate::events::{EventLog, LoggedEvent, PoolEvent};
use crate::math::CheckedArithmetic;
use crate::stats::DailyStats;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A two-asset constant-product pool (`x * y = k`) with a 0.30% input fee.
///
/// The pool owns its [`PoolState`] and [`EventLog`] behind a single
/// read-write lock. Every mutating operation holds the write lock for its
/// whole duration and journals each entry it overwrites. Its events reach
/// the log only if it succeeds; if it fails, the journal is replayed and
/// the operation leaves no trace. Reads take the read lock and always
/// observe a committed state.
///
/// Callers move assets in and out through allowances granted to the pool
/// account, as with an ERC-20 pool contract: approve the pool for asset A
/// and B before `add_liquidity`, or for the input asset before a swap.
///
/// # Example
///
/// ```rust
/// use simple_dex::clock::ManualClock;
/// use simple_dex::config::PoolConfig;
/// use simple_dex::domain::{Address, Amount, Asset, Decimals, TokenInfo};
/// use simple_dex::pool::Pool;
///
/// let pool_addr = Address::from_bytes([0xd0; 20]);
/// let a = TokenInfo::new(Address::from_bytes([0xa0; 20]), "Token A", "TKA", Decimals::MAX);
/// let b = TokenInfo::new(Address::from_bytes([0xb0; 20]), "Token B", "TKB", Decimals::MAX);
/// let config = PoolConfig::new(pool_addr, a, b).expect("valid config");
/// let pool = Pool::with_clock(config, ManualClock::new(1_700_000_000)).expect("pool");
///
/// let alice = Address::from_bytes([1; 20]);
/// for asset in [Asset::A, Asset::B] {
///     pool.mint_asset(asset, alice, Amount::new(1_000_000)).expect("fund");
///     pool.approve(asset, alice, pool_addr, Amount::new(1_000_000)).expect("approve");
/// }
///
/// let receipt = pool.add_liquidity(alice, Amount::new(100_000), Amount::new(400_000)).expect("add");
/// assert_eq!(receipt.shares, Amount::new(200_000));
///
/// let swap = pool.swap_a_for_b(alice, Amount::new(1_000)).expect("swap");
/// assert_eq!(swap.fee(), Amount::new(3));
/// assert_eq!(pool.get_transactions_24h(), Ok(1));
/// ```
#[derive(Debug)]
pub struct Pool<C = SystemClock> {
    config: PoolConfig,
    clock: C,
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: PoolState,
    log: EventLog,
}

/// One operation in progress.
///
/// Writes go straight to the pool state, each preceded by a journal entry
/// holding the value it overwrites; on failure the journal is replayed.
struct Tx<'a> {
    state: &'a mut PoolState,
    journal: Journal,
    events: Vec<PoolEvent>,
    now: u64,
}

impl<'a> Tx<'a> {
    fn new(state: &'a mut PoolState, now: u64) -> Self {
        Self {
            state,
            journal: Journal::default(),
            events: Vec::new(),
            now,
        }
    }

    fn rollback(self) {
        debug!(entries = self.journal.len(), "rolling back");
        self.state.rollback(self.journal);
    }

    /// Moves `amount` of `asset` from `from` into the pool using the pool's
    /// allowance, and credits the reserve.
    fn pull(&mut self, asset: Asset, from: Address, amount: Amount) -> Result<(), AmmError> {
        let pool = self.state.address();
        let reserve = self.state.reserve(asset).safe_add(&amount)?;
        self.transfer_from(asset, pool, from, pool, amount)?;
        self.set_reserve(asset, reserve);
        Ok(())
    }

    /// Pays `amount` of `asset` out of the pool to `to`, and debits the
    /// reserve.
    fn push(&mut self, asset: Asset, to: Address, amount: Amount) -> Result<(), AmmError> {
        let pool = self.state.address();
        let reserve = self.state.reserve(asset).safe_sub(&amount)?;
        self.transfer(asset, pool, to, amount)?;
        self.set_reserve(asset, reserve);
        Ok(())
    }

    fn transfer(&mut self, asset: Asset, from: Address, to: Address, amount: Amount) -> Result<(), AmmError> {
        self.journal.balance(&*self.state, asset, from);
        self.journal.balance(&*self.state, asset, to);
        self.state.ledger_mut(asset).transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: Asset,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.journal.allowance(&*self.state, asset, from, spender);
        self.journal.balance(&*self.state, asset, from);
        self.journal.balance(&*self.state, asset, to);
        self.state
            .ledger_mut(asset)
            .transfer_from(spender, from, to, amount)
    }

    fn approve(&mut self, asset: Asset, owner: Address, spender: Address, amount: Amount) {
        self.journal.allowance(&*self.state, asset, owner, spender);
        self.state.ledger_mut(asset).approve(owner, spender, amount);
    }

    fn mint(&mut self, asset: Asset, to: Address, amount: Amount) -> Result<(), AmmError> {
        self.journal.supply(&*self.state, asset);
        self.journal.balance(&*self.state, asset, to);
        self.state.ledger_mut(asset).mint(to, amount)
    }

    fn burn(&mut self, asset: Asset, from: Address, amount: Amount) -> Result<(), AmmError> {
        self.journal.supply(&*self.state, asset);
        self.journal.balance(&*self.state, asset, from);
        self.state.ledger_mut(asset).burn(from, amount)
    }

    fn set_reserve(&mut self, asset: Asset, amount: Amount) {
        self.journal.reserve(&*self.state, asset);
        self.state.set_reserve(asset, amount);
    }

    /// Folds `quote` into the statistics bucket of the current day.
    fn record_swap(&mut self, quote: &SwapResult) -> Result<DailyStats, AmmError> {
        let day = day_index(self.now);
        self.journal.stats(&*self.state, day);
        self.state.stats.record_swap(
            day,
            quote.amount_in(),
            quote.amount_out(),
            quote.fee(),
            quote.direction(),
        )
    }

    fn emit(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}

impl Pool<SystemClock> {
    /// Creates an empty pool stamped by the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(config: PoolConfig) -> Result<Self, AmmError> {
        Self::with_clock(config, SystemClock)
    }
}

impl FromConfig<PoolConfig> for Pool<SystemClock> {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        Self::new(config.clone())
    }
}

impl<C: Clock> Pool<C> {
    /// Creates an empty pool with an explicit time source.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn with_clock(config: PoolConfig, clock: C) -> Result<Self, AmmError> {
        config.validate()?;
        let state = PoolState::genesis(&config);
        info!(
            pool = %config.pool_address(),
            asset_a = config.asset_a().symbol(),
            asset_b = config.asset_b().symbol(),
            "pool created"
        );
        Ok(Self {
            config,
            clock,
            inner: RwLock::new(Inner {
                state,
                log: EventLog::new(),
            }),
        })
    }

    /// The configuration the pool was built from.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's own account.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.config.pool_address()
    }

    /// The pool's time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn read<T>(&self, f: impl FnOnce(&PoolState) -> T) -> T {
        f(&self.inner.read().state)
    }

    /// Runs `op` under the write lock. State changes and events are kept
    /// only if `op` succeeds; otherwise every touched entry is restored.
    fn transact<T>(
        &self,
        name: &'static str,
        op: impl FnOnce(&mut Tx<'_>) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let mut guard = self.inner.write();
        let Inner { state, log } = &mut *guard;
        let outcome = self.clock.now().and_then(|now| {
            let mut tx = Tx::new(&mut *state, now);
            match op(&mut tx) {
                Ok(value) => Ok((value, tx.events)),
                Err(err) => {
                    tx.rollback();
                    Err(err)
                }
            }
        });
        match outcome {
            Ok((value, events)) => {
                debug_assert!(state.is_consistent(), "{name} broke reserve bookkeeping");
                for event in events {
                    log.append(event);
                }
                Ok(value)
            }
            Err(err) => {
                warn!(op = name, error = %err, "operation rejected");
                Err(err)
            }
        }
    }

    fn ensure_external(&self, account: Address) -> Result<(), AmmError> {
        if account == self.address() {
            return Err(AmmError::InvalidAsset("the pool account cannot act for itself"));
        }
        Ok(())
    }

    // -- liquidity -----------------------------------------------------------

    /// Deposits `amount_a` and `amount_b` from `caller` and mints shares to
    /// them.
    ///
    /// The first deposit mints `floor(sqrt(a * b))` shares and sets the
    /// price. Later deposits mint `min(a * S / Ra, b * S / Rb)`; any excess
    /// of the over-supplied asset stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the deposit is too small to
    ///   mint a share.
    /// - [`AmmError::InsufficientAllowance`] / [`AmmError::InsufficientBalance`]
    ///   if the caller has not approved or does not hold the amounts.
    /// - [`AmmError::InvalidAsset`] if `caller` is the pool account.
    /// - [`AmmError::ArithmeticOverflow`] on overflow.
    pub fn add_liquidity(
        &self,
        caller: Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt, AmmError> {
        self.transact("add_liquidity", |tx| {
            if amount_a.is_zero() || amount_b.is_zero() {
                return Err(AmmError::ZeroAmount);
            }
            self.ensure_external(caller)?;
            let (reserve_a, reserve_b) = tx.state.reserves();
            let shares = math::mint_shares(
                amount_a,
                amount_b,
                reserve_a,
                reserve_b,
                tx.state.share_supply(),
            )?;

            tx.pull(Asset::A, caller, amount_a)?;
            tx.pull(Asset::B, caller, amount_b)?;
            tx.mint(Asset::Share, caller, shares)?;
            tx.emit(PoolEvent::LiquidityAdded {
                provider: caller,
                amount_a,
                amount_b,
                shares_minted: shares,
                timestamp: tx.now,
            });

            info!(%caller, %amount_a, %amount_b, %shares, "liquidity added");
            Ok(LiquidityReceipt {
                kind: ChangeKind::Add,
                amount_a,
                amount_b,
                shares,
            })
        })
    }

    /// Burns `share_amount` of `caller`'s shares and pays out their
    /// proportional claim, `floor(s * R / S)` of each reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `share_amount` is zero.
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer shares.
    /// - [`AmmError::InsufficientLiquidity`] if either payout rounds to zero.
    /// - [`AmmError::InvalidAsset`] if `caller` is the pool account.
    pub fn remove_liquidity(
        &self,
        caller: Address,
        share_amount: Amount,
    ) -> Result<LiquidityReceipt, AmmError> {
        self.transact("remove_liquidity", |tx| {
            if share_amount.is_zero() {
                return Err(AmmError::ZeroAmount);
            }
            self.ensure_external(caller)?;
            let supply = tx.state.share_supply();
            if supply.is_zero() {
                return Err(AmmError::EmptyPool);
            }
            let held = tx.state.shares.balance_of(&caller);
            if share_amount > held {
                return Err(AmmError::InsufficientShares {
                    have: held.get(),
                    need: share_amount.get(),
                });
            }
            let (reserve_a, reserve_b) = tx.state.reserves();
            let (amount_a, amount_b) = math::redeem(share_amount, reserve_a, reserve_b, supply)?;
            if amount_a.is_zero() || amount_b.is_zero() {
                return Err(AmmError::InsufficientLiquidity);
            }

            tx.burn(Asset::Share, caller, share_amount)?;
            tx.push(Asset::A, caller, amount_a)?;
            tx.push(Asset::B, caller, amount_b)?;
            tx.emit(PoolEvent::LiquidityRemoved {
                provider: caller,
                amount_a,
                amount_b,
                shares_burned: share_amount,
                timestamp: tx.now,
            });

            info!(%caller, shares = %share_amount, %amount_a, %amount_b, "liquidity removed");
            Ok(LiquidityReceipt {
                kind: ChangeKind::Remove,
                amount_a,
                amount_b,
                shares: share_amount,
            })
        })
    }

    // -- swaps ---------------------------------------------------------------

    /// Sells `amount_in` of asset A for asset B.
    ///
    /// # Errors
    ///
    /// See [`swap_exact_in`](Self::swap_exact_in).
    pub fn swap_a_for_b(&self, caller: Address, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.swap_exact_in(caller, amount_in, SwapDirection::AToB, Amount::ZERO)
    }

    /// Sells `amount_in` of asset B for asset A.
    ///
    /// # Errors
    ///
    /// See [`swap_exact_in`](Self::swap_exact_in).
    pub fn swap_b_for_a(&self, caller: Address, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.swap_exact_in(caller, amount_in, SwapDirection::BToA, Amount::ZERO)
    }

    /// Sells exactly `amount_in` in `direction`, failing if the output
    /// would be below `min_amount_out`.
    ///
    /// The whole input, fee included, is added to the input reserve; the
    /// swap is recorded in the current day's statistics and emits `Swap`
    /// followed by `DailyStatsUpdated`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty or the
    ///   output would be zero or drain the output reserve.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::InsufficientAllowance`] / [`AmmError::InsufficientBalance`]
    ///   if the caller has not approved or does not hold `amount_in`.
    /// - [`AmmError::InvalidAsset`] if `caller` is the pool account.
    pub fn swap_exact_in(
        &self,
        caller: Address,
        amount_in: Amount,
        direction: SwapDirection,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.transact("swap", |tx| {
            if amount_in.is_zero() {
                return Err(AmmError::ZeroAmount);
            }
            self.ensure_external(caller)?;
            let (input, output) = (direction.input(), direction.output());
            let quote = math::quote_swap(
                direction,
                amount_in,
                tx.state.reserve(input),
                tx.state.reserve(output),
            )?;
            let amount_out = quote.amount_out();
            if amount_out < min_amount_out {
                return Err(AmmError::SlippageExceeded {
                    minimum: min_amount_out.get(),
                    actual: amount_out.get(),
                });
            }

            tx.pull(input, caller, amount_in)?;
            tx.push(output, caller, amount_out)?;
            let day = tx.record_swap(&quote)?;
            let token_in = tx.state.ledger(input).info().address();
            let token_out = tx.state.ledger(output).info().address();
            tx.emit(PoolEvent::Swap {
                user: caller,
                token_in,
                token_out,
                amount_in,
                amount_out,
                fee: quote.fee(),
                timestamp: tx.now,
            });
            tx.emit(PoolEvent::from(day));

            info!(%caller, %direction, %amount_in, %amount_out, fee = %quote.fee(), "swap executed");
            Ok(quote)
        })
    }

    /// Quotes a swap at the current reserves without executing it.
    ///
    /// # Errors
    ///
    /// Same pricing errors as [`swap_exact_in`](Self::swap_exact_in).
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        let quote = self.read(|s| {
            math::quote_swap(
                direction,
                amount_in,
                s.reserve(direction.input()),
                s.reserve(direction.output()),
            )
        })?;
        debug!(%direction, %amount_in, amount_out = %quote.amount_out(), "quoted");
        Ok(quote)
    }

    /// Output of selling `amount_in`, A for B when `is_a_for_b`.
    ///
    /// # Errors
    ///
    /// Same pricing errors as [`swap_exact_in`](Self::swap_exact_in).
    pub fn get_amount_out(&self, amount_in: Amount, is_a_for_b: bool) -> Result<Amount, AmmError> {
        self.quote(SwapDirection::from_flag(is_a_for_b), amount_in)
            .map(|q| q.amount_out())
    }

    /// The pool's swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        FeeTier::SWAP_FEE
    }

    // -- reads ---------------------------------------------------------------

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub fn get_reserves(&self) -> (Amount, Amount) {
        self.read(PoolState::reserves)
    }

    /// Outstanding liquidity shares.
    pub fn share_supply(&self) -> Amount {
        self.read(PoolState::share_supply)
    }

    /// `reserve_a + reserve_b` in raw units, the base of [`get_apr`](Self::get_apr).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the sum exceeds `u128`.
    pub fn get_total_liquidity(&self) -> Result<Amount, AmmError> {
        self.read(|s| s.reserve_a.safe_add(&s.reserve_b))
    }

    /// Number of accounts holding shares.
    #[must_use]
    pub fn get_liquidity_providers_count(&self) -> usize {
        self.read(|s| s.shares.holder_count())
    }

    /// `(volume_a, volume_b)` of the current UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Clock`] if the clock fails.
    pub fn get_volume_24h(&self) -> Result<(Amount, Amount), AmmError> {
        let today = self.clock.today()?;
        Ok(self.read(|s| s.stats.volume_24h(today)))
    }

    /// Fees collected during the current UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Clock`] if the clock fails.
    pub fn get_fees_24h(&self) -> Result<Amount, AmmError> {
        let today = self.clock.today()?;
        Ok(self.read(|s| s.stats.fees_24h(today)))
    }

    /// Swaps executed during the current UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Clock`] if the clock fails.
    pub fn get_transactions_24h(&self) -> Result<u64, AmmError> {
        let today = self.clock.today()?;
        Ok(self.read(|s| s.stats.transactions_24h(today)))
    }

    /// Today's fees annualised against total liquidity, in basis points
    /// (hundredths of a percent).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Clock`] if the clock fails, or
    /// [`AmmError::ArithmeticOverflow`] on overflow.
    pub fn get_apr(&self) -> Result<u128, AmmError> {
        let today = self.clock.today()?;
        self.read(|s| {
            let total = s.reserve_a.safe_add(&s.reserve_b)?;
            s.stats.apr(today, total)
        })
    }

    /// Fees collected since genesis.
    pub fn total_fees_collected(&self) -> Amount {
        self.read(|s| s.stats.total_fees_collected())
    }

    /// Statistics of one day, if any swap happened on it.
    #[must_use]
    pub fn daily_stats(&self, day: u64) -> Option<DailyStats> {
        self.read(|s| s.stats.day(day).copied())
    }

    /// All day buckets in ascending order.
    #[must_use]
    pub fn stats_history(&self) -> Vec<DailyStats> {
        self.read(|s| s.stats.days().copied().collect())
    }

    /// `owner`'s shares and what they would redeem for right now.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    pub fn position(&self, owner: Address) -> Result<LpPosition, AmmError> {
        self.read(|s| {
            let shares = s.shares.balance_of(&owner);
            if shares.is_zero() {
                return Ok(LpPosition::default());
            }
            let supply = s.share_supply();
            let (amount_a, amount_b) = math::redeem(shares, s.reserve_a, s.reserve_b, supply)?;
            Ok(LpPosition {
                shares,
                share_of_pool: math::share_of_pool(shares, supply)?,
                amount_a,
                amount_b,
            })
        })
    }

    /// Amount of the other asset that balances a deposit of `amount` on
    /// `side` at the current ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount` is zero.
    /// - [`AmmError::EmptyPool`] if the pool has no reserves yet.
    /// - [`AmmError::InvalidAsset`] if `side` is [`Asset::Share`].
    pub fn quote_deposit(&self, amount: Amount, side: Asset) -> Result<Amount, AmmError> {
        self.read(|s| math::quote_deposit(amount, side, s.reserve_a, s.reserve_b))
    }

    /// A consistent copy of reserves, supply and counters.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        let inner = self.inner.read();
        let s = &inner.state;
        PoolSnapshot {
            reserve_a: s.reserve_a,
            reserve_b: s.reserve_b,
            share_supply: s.share_supply(),
            liquidity_providers: s.shares.holder_count(),
            total_fees_collected: s.stats.total_fees_collected(),
            next_event_seq: inner.log.next_seq(),
        }
    }

    /// Every event emitted so far.
    #[must_use]
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.inner.read().log.events().to_vec()
    }

    /// Events with sequence number `>= cursor`.
    #[must_use]
    pub fn events_since(&self, cursor: u64) -> Vec<LoggedEvent> {
        self.inner.read().log.events_since(cursor).to_vec()
    }

    // -- asset ledgers -------------------------------------------------------

    /// Metadata of one of the pool's ledgers.
    #[must_use]
    pub fn token_info(&self, asset: Asset) -> TokenInfo {
        self.read(|s| s.ledger(asset).info().clone())
    }

    /// Total supply of `asset`.
    pub fn total_supply(&self, asset: Asset) -> Amount {
        self.read(|s| s.ledger(asset).total_supply())
    }

    /// `owner`'s balance of `asset`.
    pub fn balance_of(&self, asset: Asset, owner: Address) -> Amount {
        self.read(|s| s.ledger(asset).balance_of(&owner))
    }

    /// Allowance of `spender` over `owner`'s `asset`.
    pub fn allowance(&self, asset: Asset, owner: Address, spender: Address) -> Amount {
        self.read(|s| s.ledger(asset).allowance(&owner, &spender))
    }

    /// Sets `spender`'s allowance over `owner`'s `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `owner` is the pool account.
    pub fn approve(
        &self,
        asset: Asset,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.transact("approve", |tx| {
            self.ensure_external(owner)?;
            tx.approve(asset, owner, spender, amount);
            Ok(())
        })
    }

    /// Moves `amount` of `asset` between two accounts other than the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if either side is the pool account;
    ///   reserves only move through liquidity and swap operations.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    pub fn transfer(
        &self,
        asset: Asset,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.transact("transfer", |tx| {
            self.ensure_external(from)?;
            self.ensure_external(to)?;
            tx.transfer(asset, from, to, amount)
        })
    }

    /// Moves `amount` of `asset` from `from` to `to` on behalf of
    /// `spender`, consuming the allowance `from` granted to `spender`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `spender`, `from` or `to` is the pool
    ///   account; the pool spends its own allowances only inside liquidity
    ///   and swap operations.
    /// - [`AmmError::InsufficientAllowance`] if `spender` is approved for
    ///   less than `amount`.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    pub fn transfer_from(
        &self,
        asset: Asset,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.transact("transfer_from", |tx| {
            self.ensure_external(spender)?;
            self.ensure_external(from)?;
            self.ensure_external(to)?;
            tx.transfer_from(asset, spender, from, to, amount)
        })
    }

    /// Mints `amount` of asset A or B to `to`, e.g. a deployer's initial
    /// supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount` is zero.
    /// - [`AmmError::InvalidAsset`] for [`Asset::Share`], or if `to` is the
    ///   pool account.
    /// - [`AmmError::ArithmeticOverflow`] if the supply would overflow.
    pub fn mint_asset(&self, asset: Asset, to: Address, amount: Amount) -> Result<(), AmmError> {
        self.transact("mint_asset", |tx| {
            if amount.is_zero() {
                return Err(AmmError::ZeroAmount);
            }
            if asset == Asset::Share {
                return Err(AmmError::InvalidAsset("shares are only minted by add_liquidity"));
            }
            self.ensure_external(to)?;
            tx.mint(asset, to, amount)
        })
    }
}

impl<C: Clock> SwapPool for Pool<C> {
    fn reserves(&self) -> (Amount, Amount) {
        self.get_reserves()
    }

    fn fee_tier(&self) -> FeeTier {
        FeeTier::SWAP_FEE
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        Self::quote(self, direction, amount_in)
    }

    fn swap(
        &self,
        caller: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.swap_exact_in(caller, amount_in, direction, min_amount_out)
    }
}

impl<C: Clock> LiquidityPool for Pool<C> {
    fn add_liquidity(
        &self,
        caller: Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt, AmmError> {
        Self::add_liquidity(self, caller, amount_a, amount_b)
    }

    fn remove_liquidity(&self, caller: Address, shares: Amount) -> Result<LiquidityReceipt, AmmError> {
        Self::remove_liquidity(self, caller, shares)
    }

    fn share_supply(&self) -> Amount {
        Self::share_supply(self)
    }

    fn position(&self, owner: Address) -> Result<LpPosition, AmmError> {
        Self::position(self, owner)
    }
}
