//! Token decimal places.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of fractional decimal digits of a token's smallest unit.
///
/// Valid range is `0..=18`. Deserialization goes through the same check
/// as [`Decimals::new`].
///
/// # Examples
///
/// ```
/// use simple_dex::domain::Decimals;
///
/// let d = Decimals::new(18).expect("18 is valid");
/// assert_eq!(d.scale_up(1), 1_000_000_000_000_000_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the convention for the pool's assets and
    /// its share token.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole-token count to raw units.
    ///
    /// Cannot overflow because `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, amount: u64) -> u128 {
        (amount as u128) * self.factor()
    }

    /// Returns `10^decimals` as `u128`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for v in [0u8, 6, 18] {
            let Ok(d) = Decimals::new(v) else {
                panic!("expected Ok for {v}");
            };
            assert_eq!(d.get(), v);
        }
    }

    #[test]
    fn invalid_nineteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::InvalidConfiguration("decimals must be 0..=18"));
    }

    #[test]
    fn scale_up_eth() {
        assert_eq!(Decimals::MAX.scale_up(1), 1_000_000_000_000_000_000);
        assert_eq!(Decimals::ZERO.scale_up(42), 42);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let parsed: Result<Decimals, _> = serde_json::from_str("19");
        assert!(parsed.is_err());
        let Ok(ok) = serde_json::from_str::<Decimals>("6") else {
            panic!("6 is valid");
        };
        assert_eq!(ok.get(), 6);
    }
}
