//! Account identity used for ledger owners, spenders and the pool itself.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// A 20-byte account identity.
///
/// Every ledger balance and allowance is keyed by `Address`, including the
/// pool's own holdings. All 20-byte sequences are valid addresses; the
/// all-zero address is reserved as a sentinel and rejected as a pool
/// account by configuration validation.
///
/// Serialized as a `0x`-prefixed lowercase hex string.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::Address;
///
/// let addr = Address::from_bytes([0xab; 20]);
/// assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));
/// let parsed: Address = addr.to_string().parse().expect("valid hex");
/// assert_eq!(parsed, addr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 20])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 20 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { .. } => {
                AmmError::InvalidConfiguration("address contains a non-hex digit")
            }
            _ => AmmError::InvalidConfiguration("address must be 20 hex-encoded bytes"),
        })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}
