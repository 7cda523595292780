//! Account address type with `0x` prefix.
//!
//! Addresses are normalized to lowercase on construction, so equality and
//! hashing are case-insensitive by design. The admin gate and the per-account
//! voter lookup both rely on this.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// An account address: `0x` followed by 40 hex characters.
///
/// Stored lowercase. A disconnected session is `Option<Address>::None`,
/// never an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Address(String);

impl Address {
    /// The standard address prefix.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex characters after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Parse and normalize an address string.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let hex_part = raw
            .strip_prefix(Self::PREFIX)
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if hex_part.len() != Self::HEX_LEN {
            return Err(AddressError::BadLength(hex_part.len()));
        }

        hex::decode(hex_part).map_err(|_| AddressError::BadHex)?;

        Ok(Self(format!("{}{}", Self::PREFIX, hex_part.to_lowercase())))
    }

    /// The normalized address string, including the `0x` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x8Ba1f109551bD432803012645Ac136ddd64DBA72";

    #[test]
    fn parse_normalizes_to_lowercase() {
        let addr = Address::parse(CHECKSUMMED).unwrap();
        assert_eq!(addr.as_str(), "0x8ba1f109551bd432803012645ac136ddd64dba72");
    }

    #[test]
    fn equality_is_case_insensitive() {
        let a = Address::parse(CHECKSUMMED).unwrap();
        let b = Address::parse(&CHECKSUMMED.to_uppercase().replace("0X", "0x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = Address::parse("8ba1f109551bd432803012645ac136ddd64dba72").unwrap_err();
        assert!(matches!(err, AddressError::MissingPrefix));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            Address::parse("0x1234").unwrap_err(),
            AddressError::BadLength(4)
        ));
    }

    #[test]
    fn rejects_non_hex() {
        let err = Address::parse("0xzza1f109551bd432803012645ac136ddd64dba72").unwrap_err();
        assert!(matches!(err, AddressError::BadHex));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Address = serde_json::from_str(&format!("\"{CHECKSUMMED}\"")).unwrap();
        assert_eq!(ok.as_str(), "0x8ba1f109551bd432803012645ac136ddd64dba72");
        assert!(serde_json::from_str::<Address>("\"not-an-address\"").is_err());
    }
}
