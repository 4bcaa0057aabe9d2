//! Balance, allowance and supply bookkeeping for one fungible token.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Address, Amount, TokenInfo};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// ERC-20 style ledger for a single token.
///
/// The pool owns three of these: asset A, asset B and the liquidity-share
/// token. Owners with a zero balance are not stored, so
/// [`holder_count`](Self::holder_count) counts exactly the non-zero
/// holders.
///
/// # Invariants
///
/// - The sum of all balances equals [`total_supply`](Self::total_supply).
/// - Every operation either applies completely or returns an error and
///   leaves the ledger untouched.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Address, Amount, Decimals, TokenInfo};
/// use simple_dex::ledger::FungibleLedger;
///
/// let alice = Address::from_bytes([1; 20]);
/// let bob = Address::from_bytes([2; 20]);
/// let info = TokenInfo::new(Address::from_bytes([9; 20]), "Token A", "TKA", Decimals::MAX);
///
/// let mut ledger = FungibleLedger::new(info);
/// ledger.mint(alice, Amount::new(100)).expect("mint");
/// ledger.transfer(alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(&alice), Amount::new(60));
/// assert_eq!(ledger.total_supply(), Amount::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungibleLedger {
    info: TokenInfo,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl FungibleLedger {
    /// Creates an empty ledger with zero supply.
    #[must_use]
    pub fn new(info: TokenInfo) -> Self {
        Self {
            info,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: Amount::ZERO,
        }
    }

    /// Token metadata.
    #[must_use]
    pub const fn info(&self) -> &TokenInfo {
        &self.info
    }

    /// Outstanding supply.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `owner`, zero if unknown.
    pub fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    /// Amount `spender` may still move out of `owner`'s balance.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Number of owners holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::ArithmeticOverflow`] if the recipient balance would overflow.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), AmmError> {
        let have = self.balance_of(&from);
        if amount > have {
            return Err(AmmError::InsufficientBalance {
                have: have.get(),
                need: amount.get(),
            });
        }
        if from != to {
            let credited = self.balance_of(&to).safe_add(&amount)?;
            self.set_balance(from, Amount::new(have.get() - amount.get()));
            self.set_balance(to, credited);
        }
        debug!(token = %self.info.symbol(), %from, %to, %amount, "transfer");
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s balance, replacing
    /// any previous value.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.set_allowance(owner, spender, amount);
        debug!(token = %self.info.symbol(), %owner, %spender, %amount, "approve");
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// The allowance is checked before the balance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAllowance`] if `spender` is approved for less
    ///   than `amount`.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::ArithmeticOverflow`] if the recipient balance would overflow.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let approved = self.allowance(&from, &spender);
        if amount > approved {
            return Err(AmmError::InsufficientAllowance {
                approved: approved.get(),
                need: amount.get(),
            });
        }
        self.transfer(from, to, amount)?;
        self.approve(from, spender, Amount::new(approved.get() - amount.get()));
        Ok(())
    }

    /// Creates `amount` new units owned by `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the supply or the
    /// recipient balance would overflow.
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), AmmError> {
        let supply = self.total_supply.safe_add(&amount)?;
        let credited = self.balance_of(&to).safe_add(&amount)?;
        self.total_supply = supply;
        self.set_balance(to, credited);
        debug!(token = %self.info.symbol(), %to, %amount, "mint");
        Ok(())
    }

    /// Destroys `amount` units owned by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    pub fn burn(&mut self, from: Address, amount: Amount) -> Result<(), AmmError> {
        let have = self.balance_of(&from);
        if amount > have {
            return Err(AmmError::InsufficientBalance {
                have: have.get(),
                need: amount.get(),
            });
        }
        // balance <= supply, so neither subtraction can underflow
        self.total_supply = self.total_supply.safe_sub(&amount)?;
        self.set_balance(from, Amount::new(have.get() - amount.get()));
        debug!(token = %self.info.symbol(), %from, %amount, "burn");
        Ok(())
    }

    /// Puts back a balance recorded before a failed operation. Supply is
    /// restored separately with [`restore_supply`](Self::restore_supply).
    pub(crate) fn restore_balance(&mut self, owner: Address, amount: Amount) {
        self.set_balance(owner, amount);
    }

    pub(crate) fn restore_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.set_allowance(owner, spender, amount);
    }

    pub(crate) fn restore_supply(&mut self, amount: Amount) {
        self.total_supply = amount;
    }

    fn set_balance(&mut self, owner: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, amount);
        }
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 20])
    }

    fn ledger() -> FungibleLedger {
        FungibleLedger::new(TokenInfo::new(addr(0xaa), "Token A", "TKA", Decimals::MAX))
    }

    fn funded(owner: Address, amount: u128) -> FungibleLedger {
        let mut l = ledger();
        let Ok(()) = l.mint(owner, Amount::new(amount)) else {
            panic!("mint");
        };
        l
    }

    fn sum_of_balances(l: &FungibleLedger) -> u128 {
        l.balances.values().map(Amount::get).sum()
    }

    #[test]
    fn mint_increases_supply_and_balance() {
        let l = funded(addr(1), 500);
        assert_eq!(l.total_supply(), Amount::new(500));
        assert_eq!(l.balance_of(&addr(1)), Amount::new(500));
        assert_eq!(l.holder_count(), 1);
    }

    #[test]
    fn mint_overflow_leaves_ledger_unchanged() {
        let mut l = funded(addr(1), u128::MAX);
        let before = l.clone();
        let Err(AmmError::ArithmeticOverflow(_)) = l.mint(addr(2), Amount::new(1)) else {
            panic!("expected overflow");
        };
        assert_eq!(l, before);
    }

    #[test]
    fn transfer_moves_balance() {
        let mut l = funded(addr(1), 100);
        let Ok(()) = l.transfer(addr(1), addr(2), Amount::new(30)) else {
            panic!("transfer");
        };
        assert_eq!(l.balance_of(&addr(1)), Amount::new(70));
        assert_eq!(l.balance_of(&addr(2)), Amount::new(30));
        assert_eq!(sum_of_balances(&l), l.total_supply().get());
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut l = funded(addr(1), 100);
        assert_eq!(
            l.transfer(addr(1), addr(2), Amount::new(101)),
            Err(AmmError::InsufficientBalance {
                have: 100,
                need: 101
            })
        );
        assert_eq!(l.balance_of(&addr(2)), Amount::ZERO);
    }

    #[test]
    fn transfer_entire_balance_drops_holder() {
        let mut l = funded(addr(1), 100);
        let Ok(()) = l.transfer(addr(1), addr(2), Amount::new(100)) else {
            panic!("transfer");
        };
        assert_eq!(l.holder_count(), 1);
        assert_eq!(l.balance_of(&addr(1)), Amount::ZERO);
    }

    #[test]
    fn self_transfer_is_noop() {
        let mut l = funded(addr(1), 100);
        let Ok(()) = l.transfer(addr(1), addr(1), Amount::new(60)) else {
            panic!("transfer");
        };
        assert_eq!(l.balance_of(&addr(1)), Amount::new(100));
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut l = funded(addr(1), 100);
        l.approve(addr(1), addr(9), Amount::new(50));
        let Ok(()) = l.transfer_from(addr(9), addr(1), addr(2), Amount::new(20)) else {
            panic!("transfer_from");
        };
        assert_eq!(l.allowance(&addr(1), &addr(9)), Amount::new(30));
        assert_eq!(l.balance_of(&addr(2)), Amount::new(20));
    }

    #[test]
    fn transfer_from_insufficient_allowance() {
        let mut l = funded(addr(1), 100);
        l.approve(addr(1), addr(9), Amount::new(10));
        assert_eq!(
            l.transfer_from(addr(9), addr(1), addr(2), Amount::new(11)),
            Err(AmmError::InsufficientAllowance {
                approved: 10,
                need: 11
            })
        );
        assert_eq!(l.allowance(&addr(1), &addr(9)), Amount::new(10));
    }

    #[test]
    fn transfer_from_insufficient_balance_keeps_allowance() {
        let mut l = funded(addr(1), 5);
        l.approve(addr(1), addr(9), Amount::new(10));
        let before = l.clone();
        assert_eq!(
            l.transfer_from(addr(9), addr(1), addr(2), Amount::new(8)),
            Err(AmmError::InsufficientBalance { have: 5, need: 8 })
        );
        assert_eq!(l, before);
    }

    #[test]
    fn approve_overwrites() {
        let mut l = ledger();
        l.approve(addr(1), addr(2), Amount::new(10));
        l.approve(addr(1), addr(2), Amount::new(3));
        assert_eq!(l.allowance(&addr(1), &addr(2)), Amount::new(3));
        l.approve(addr(1), addr(2), Amount::ZERO);
        assert_eq!(l.allowance(&addr(1), &addr(2)), Amount::ZERO);
    }

    #[test]
    fn burn_reduces_supply() {
        let mut l = funded(addr(1), 100);
        let Ok(()) = l.burn(addr(1), Amount::new(40)) else {
            panic!("burn");
        };
        assert_eq!(l.total_supply(), Amount::new(60));
        assert_eq!(l.balance_of(&addr(1)), Amount::new(60));
    }

    #[test]
    fn burn_more_than_held() {
        let mut l = funded(addr(1), 100);
        assert_eq!(
            l.burn(addr(1), Amount::new(101)),
            Err(AmmError::InsufficientBalance {
                have: 100,
                need: 101
            })
        );
        assert_eq!(l.total_supply(), Amount::new(100));
    }

    #[test]
    fn restore_undoes_spend_and_mint() {
        let mut l = funded(addr(1), 100);
        l.approve(addr(1), addr(9), Amount::new(30));
        let before = l.clone();

        let Ok(()) = l.transfer_from(addr(9), addr(1), addr(2), Amount::new(30)) else {
            panic!("transfer_from");
        };
        let Ok(()) = l.mint(addr(3), Amount::new(5)) else {
            panic!("mint");
        };
        l.restore_supply(Amount::new(100));
        l.restore_balance(addr(3), Amount::ZERO);
        l.restore_balance(addr(2), Amount::ZERO);
        l.restore_balance(addr(1), Amount::new(100));
        l.restore_allowance(addr(1), addr(9), Amount::new(30));
        assert_eq!(l, before);
        assert_eq!(l.holder_count(), 1);
    }
}
