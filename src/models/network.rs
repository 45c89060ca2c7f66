//! Immutable network metadata resolved from configuration at startup.

use crate::models::EvmAddress;

/// A token contract tracked on a network. Identity is the contract address;
/// the symbol is a display hint only and never trusted over on-chain state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub address: EvmAddress,
    pub symbol: Option<String>,
}

/// Resolved metadata for a supported network. Built once from the config
/// file and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    /// Canonical network name as written in configuration.
    pub name: String,
    /// RPC endpoint with any env-sourced value already resolved.
    pub rpc_url: String,
    pub chain_id: u64,
    /// Tracked tokens in declaration order. Response ordering follows this.
    pub tokens: Vec<TokenDescriptor>,
}
