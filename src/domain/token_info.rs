//! Token identity and metadata.

use serde::{Deserialize, Serialize};

use super::{Address, Decimals};
use crate::error::AmmError;

/// Longest accepted ticker symbol.
const MAX_SYMBOL_LEN: usize = 10;

/// ERC-20 style metadata for one of the pool's ledgers.
///
/// The `address` identifies the token in emitted events (`Swap.token_in`,
/// `Swap.token_out`); `name`, `symbol` and `decimals` are descriptive.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Address, Decimals, TokenInfo};
///
/// let info = TokenInfo::new(Address::from_bytes([1; 20]), "Token A", "TKA", Decimals::MAX);
/// assert!(info.validate().is_ok());
/// assert_eq!(info.symbol(), "TKA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    address: Address,
    name: String,
    symbol: String,
    #[serde(default = "default_decimals")]
    decimals: Decimals,
}

fn default_decimals() -> Decimals {
    Decimals::MAX
}

impl TokenInfo {
    /// Creates token metadata. Call [`validate`](Self::validate) before use.
    #[must_use]
    pub fn new(
        address: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Self {
        Self {
            address,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Validates the metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the address is zero,
    /// the name is empty, or the symbol is empty or longer than 10 characters.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.address.is_zero() {
            return Err(AmmError::InvalidConfiguration("token address is zero"));
        }
        if self.name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("token name is empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("token symbol is empty"));
        }
        if self.symbol.chars().count() > MAX_SYMBOL_LEN {
            return Err(AmmError::InvalidConfiguration(
                "token symbol longer than 10 characters",
            ));
        }
        Ok(())
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
