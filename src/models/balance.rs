//! Balance data model: raw on-chain token state and the validated balance
//! record returned to API callers.
//!
//! `TokenBalanceRecord` can only be built through [`TokenBalanceRecord::new`],
//! which enforces the output invariants (non-empty strings, bounded decimals,
//! strictly positive balance, sane USD value). A record that fails these
//! checks is dropped by the aggregator instead of reaching the response.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::{constants::MAX_TOKEN_DECIMALS, models::EvmAddress};

/// Raw per-token contract state for one wallet, straight off the chain.
/// Transient; never serialized or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTokenState {
    /// Smallest-unit balance (e.g. wei for 18-decimal tokens).
    pub balance: U256,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecordValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("decimals {0} exceeds the supported maximum of {max}", max = MAX_TOKEN_DECIMALS)]
    DecimalsOutOfRange(u8),
    #[error("zero balances are filtered, not emitted")]
    ZeroBalance,
    #[error("usd value {0} is negative or not finite")]
    InvalidUsdValue(f64),
}

/// One entry of the balances response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenBalanceRecord {
    /// Token contract address, lowercase `0x`-prefixed hex.
    #[schema(example = "0x6b175474e89094c44da98b954eedeac495271d0f")]
    pub token_address: String,
    pub name: String,
    pub symbol: String,
    #[schema(maximum = 18)]
    pub decimals: u8,
    /// Smallest-unit balance as a decimal integer string. Kept as a string
    /// because the value can exceed any machine integer width.
    #[schema(example = "1000000000000000000")]
    pub balance: String,
    /// USD value rounded to cents; 0.0 when no price was available.
    pub balance_usd: f64,
}

impl TokenBalanceRecord {
    /// Validating factory. Address shape is guaranteed by the typed
    /// parameter; the remaining invariants are checked here.
    pub fn new(
        token_address: &EvmAddress,
        name: String,
        symbol: String,
        decimals: u8,
        balance: U256,
        balance_usd: f64,
    ) -> Result<Self, RecordValidationError> {
        if name.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("name"));
        }
        if symbol.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("symbol"));
        }
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(RecordValidationError::DecimalsOutOfRange(decimals));
        }
        if balance.is_zero() {
            return Err(RecordValidationError::ZeroBalance);
        }
        if !balance_usd.is_finite() || balance_usd < 0.0 {
            return Err(RecordValidationError::InvalidUsdValue(balance_usd));
        }

        Ok(Self {
            token_address: token_address.to_string(),
            name,
            symbol,
            decimals,
            balance: balance.to_string(),
            balance_usd,
        })
    }
}
