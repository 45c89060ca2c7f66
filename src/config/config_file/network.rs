//! Per-network configuration entries.
//!
//! Each entry names a network, its chain id, an RPC endpoint (directly or
//! through an environment variable), and the token contracts tracked on it.
//! Structural validation happens at load time; env resolution happens once
//! when the registry is built, so misconfiguration fails startup rather than
//! a request.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigFileError,
    models::{EvmAddress, NetworkDescriptor, PlainOrEnvValue, TokenDescriptor},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TokenFileConfig {
    /// Token contract address, `0x`-prefixed hex.
    pub address: String,
    /// Optional display hint; on-chain state wins at read time.
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NetworkFileConfig {
    /// Canonical network name (e.g. "ethereum"). Lookups are
    /// case-insensitive.
    pub network: String,
    pub chain_id: u64,
    /// RPC endpoint, plain or env-sourced.
    pub rpc_url: PlainOrEnvValue,
    #[serde(default)]
    pub tokens: Vec<TokenFileConfig>,
}

impl NetworkFileConfig {
    /// Validates the structure of this entry without touching the
    /// environment.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.network.trim().is_empty() {
            return Err(ConfigFileError::MissingField("network name".into()));
        }

        if self.chain_id == 0 {
            return Err(ConfigFileError::InvalidFormat(format!(
                "chain_id must be positive for network {}",
                self.network
            )));
        }

        let mut seen = HashSet::new();
        for token in &self.tokens {
            let address = EvmAddress::parse(&token.address).map_err(|e| {
                ConfigFileError::InvalidFormat(format!(
                    "Invalid token address on network {}: {}",
                    self.network, e
                ))
            })?;
            if !seen.insert(address) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Token {} listed twice on network {}",
                    address, self.network
                )));
            }
        }

        Ok(())
    }

    /// Resolves env-sourced values and produces the immutable descriptor the
    /// registry serves.
    pub fn resolve(&self) -> Result<NetworkDescriptor, ConfigFileError> {
        let rpc_url = self
            .rpc_url
            .get_value()
            .map_err(|e| ConfigFileError::MissingEnvVar(e.to_string()))?;

        reqwest::Url::parse(&rpc_url).map_err(|_| {
            ConfigFileError::InvalidFormat(format!(
                "Invalid RPC URL for network {}: {}",
                self.network, rpc_url
            ))
        })?;

        let tokens = self
            .tokens
            .iter()
            .map(|token| {
                let address = EvmAddress::parse(&token.address).map_err(|e| {
                    ConfigFileError::InvalidFormat(format!(
                        "Invalid token address on network {}: {}",
                        self.network, e
                    ))
                })?;
                Ok(TokenDescriptor {
                    address,
                    symbol: token.symbol.clone(),
                })
            })
            .collect::<Result<Vec<_>, ConfigFileError>>()?;

        Ok(NetworkDescriptor {
            name: self.network.clone(),
            rpc_url,
            chain_id: self.chain_id,
            tokens,
        })
    }
}
