//! Construction from a validated configuration.

use crate::error::AmmError;

/// Builds a value from its configuration, validating every invariant on
/// the way. A successfully constructed value is ready for use.
///
/// There is no blanket implementation: each configuration pairing is
/// explicit.
///
/// # Examples
///
/// ```
/// use simple_dex::config::PoolConfig;
/// use simple_dex::domain::{Address, Decimals, TokenInfo};
/// use simple_dex::pool::Pool;
/// use simple_dex::traits::FromConfig;
///
/// let a = TokenInfo::new(Address::from_bytes([0xa0; 20]), "Token A", "TKA", Decimals::MAX);
/// let b = TokenInfo::new(Address::from_bytes([0xb0; 20]), "Token B", "TKB", Decimals::MAX);
/// let config = PoolConfig::new(Address::from_bytes([0xd0; 20]), a, b).expect("valid");
/// let pool = Pool::from_config(&config).expect("pool");
/// assert_eq!(pool.share_supply().get(), 0);
/// ```
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of
    /// range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
