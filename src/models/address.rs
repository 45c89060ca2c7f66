//! Validated EVM address newtype.
//!
//! Every address entering the system (wallet addresses from the API path,
//! token contract addresses from configuration) is parsed through
//! [`EvmAddress`], so downstream code never handles raw address strings.

use std::{fmt, str::FromStr};

use alloy::primitives::Address;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AddressParseError {
    #[error("address must be a 0x-prefixed 40-character hex string, got {0:?}")]
    InvalidShape(String),
    #[error("address contains non-hex characters: {0:?}")]
    InvalidHex(String),
}

/// A 20-byte EVM address, guaranteed well-formed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(Address);

impl EvmAddress {
    /// Parses a `0x`-prefixed 40-hex-character address string.
    pub fn parse(s: &str) -> Result<Self, AddressParseError> {
        let hex = s
            .strip_prefix("0x")
            .ok_or_else(|| AddressParseError::InvalidShape(s.to_string()))?;
        if hex.len() != 40 {
            return Err(AddressParseError::InvalidShape(s.to_string()));
        }
        let address = Address::from_str(s).map_err(|_| AddressParseError::InvalidHex(s.to_string()))?;
        Ok(Self(address))
    }

    pub fn inner(&self) -> Address {
        self.0
    }
}

impl From<Address> for EvmAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl FromStr for EvmAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EvmAddress {
    /// Lowercase hex with the `0x` prefix. Price sources key their responses
    /// by lowercase address, so this form is used everywhere.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_lowercase() {
        let address = EvmAddress::parse("0x6B175474E89094C44Da98b954EedeAC495271d0F").unwrap();
        assert_eq!(
            address.to_string(),
            "0x6b175474e89094c44da98b954eedeac495271d0f"
        );
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let result = EvmAddress::parse("6b175474e89094c44da98b954eedeac495271d0f");
        assert!(matches!(result, Err(AddressParseError::InvalidShape(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(EvmAddress::parse("0x6b17").is_err());
        assert!(EvmAddress::parse("0x6b175474e89094c44da98b954eedeac495271d0f00").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = EvmAddress::parse("0xzz175474e89094c44da98b954eedeac495271d0f");
        assert!(matches!(result, Err(AddressParseError::InvalidHex(_))));
    }

    #[test]
    fn test_case_insensitive_equality() {
        let lower = EvmAddress::parse("0x6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        let checksummed = EvmAddress::parse("0x6B175474E89094C44Da98b954EedeAC495271d0F").unwrap();
        assert_eq!(lower, checksummed);
    }

    #[test]
    fn test_serde_round_trip() {
        let address = EvmAddress::parse("0x6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0x6b175474e89094c44da98b954eedeac495271d0f\"");
        let back: EvmAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
