//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Decimals, TokenInfo};
use crate::error::AmmError;

/// Metadata of the liquidity-share token.
///
/// The share token lives at the pool's own address, so only its
/// descriptive fields are configurable. Defaults to `"LP Token"` /
/// `"LPT"` with 18 decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareTokenConfig {
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places.
    pub decimals: Decimals,
}

impl Default for ShareTokenConfig {
    fn default() -> Self {
        Self {
            name: "LP Token".to_owned(),
            symbol: "LPT".to_owned(),
            decimals: Decimals::MAX,
        }
    }
}

/// Immutable parameters of a pool: its account, the two traded assets and
/// the share token metadata.
///
/// # Validation
///
/// - The pool address is not the zero address.
/// - Both asset descriptions pass [`TokenInfo::validate`], as does the
///   share token placed at the pool address.
/// - The assets have distinct addresses and symbols, and neither lives at
///   the pool address.
///
/// # Examples
///
/// ```
/// use simple_dex::config::PoolConfig;
///
/// let json = r#"{
///     "pool_address": "0x00000000000000000000000000000000000000d0",
///     "asset_a": { "address": "0x00000000000000000000000000000000000000a0", "name": "Token A", "symbol": "TKA" },
///     "asset_b": { "address": "0x00000000000000000000000000000000000000b0", "name": "Token B", "symbol": "TKB" }
/// }"#;
/// let config: PoolConfig = serde_json::from_str(json).expect("parse");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.share_token().symbol(), "LPT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pool_address: Address,
    asset_a: TokenInfo,
    asset_b: TokenInfo,
    #[serde(default)]
    share_token: ShareTokenConfig,
}

impl PoolConfig {
    /// Creates a validated configuration with the default share token.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn new(pool_address: Address, asset_a: TokenInfo, asset_b: TokenInfo) -> Result<Self, AmmError> {
        let config = Self {
            pool_address,
            asset_a,
            asset_b,
            share_token: ShareTokenConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the share token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn with_share_token(mut self, share_token: ShareTokenConfig) -> Result<Self, AmmError> {
        self.share_token = share_token;
        self.validate()?;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations are not validated automatically; pool
    /// construction calls this.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first violated
    /// rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool_address.is_zero() {
            return Err(AmmError::InvalidConfiguration("pool address is zero"));
        }
        self.asset_a.validate()?;
        self.asset_b.validate()?;
        self.share_token().validate()?;
        if self.asset_a.address() == self.asset_b.address() {
            return Err(AmmError::InvalidConfiguration(
                "assets must have distinct addresses",
            ));
        }
        if self.asset_a.address() == self.pool_address || self.asset_b.address() == self.pool_address {
            return Err(AmmError::InvalidConfiguration(
                "asset address collides with the pool address",
            ));
        }
        if self.asset_a.symbol() == self.asset_b.symbol() {
            return Err(AmmError::InvalidConfiguration(
                "assets must have distinct symbols",
            ));
        }
        Ok(())
    }

    /// The pool's own account, holder of the reserves.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.pool_address
    }

    /// Asset A metadata.
    #[must_use]
    pub const fn asset_a(&self) -> &TokenInfo {
        &self.asset_a
    }

    /// Asset B metadata.
    #[must_use]
    pub const fn asset_b(&self) -> &TokenInfo {
        &self.asset_b
    }

    /// Share token metadata, located at the pool address.
    #[must_use]
    pub fn share_token(&self) -> TokenInfo {
        TokenInfo::new(
            self.pool_address,
            self.share_token.name.as_str(),
            self.share_token.symbol.as_str(),
            self.share_token.decimals,
        )
    }
}
