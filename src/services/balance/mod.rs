//! The balance aggregation engine.
//!
//! One pass per request: resolve the network, read raw token state and USD
//! quotes concurrently, then merge into validated balance records. Output
//! order always equals the registry's token declaration order, regardless of
//! how the underlying calls complete.
//!
//! Failure policy: an unknown network or malformed wallet address is the
//! caller's error; a failed token read or price lookup only degrades the
//! result (fewer records, zero USD values). On-chain balances are worth
//! serving partially; prices are cosmetic.

use std::{collections::HashMap, sync::Arc};

use alloy::primitives::{utils::format_units, U256};
use log::{info, warn};

use crate::{
    models::{BalanceError, TokenBalanceRecord},
    repositories::NetworkRegistry,
    services::{ProviderError, TokenPriceService, TokenStateReader},
    utils::round_to_cents,
};

pub struct BalanceService<R, P> {
    registry: Arc<NetworkRegistry>,
    reader: R,
    price: P,
}

impl<R: TokenStateReader, P: TokenPriceService> BalanceService<R, P> {
    pub fn new(registry: Arc<NetworkRegistry>, reader: R, price: P) -> Self {
        Self {
            registry,
            reader,
            price,
        }
    }

    /// Returns every tracked token the wallet holds a non-zero balance of,
    /// in registry order, with best-effort USD values.
    pub async fn get_token_balances(
        &self,
        network_key: &str,
        wallet_address: &str,
    ) -> Result<Vec<TokenBalanceRecord>, BalanceError> {
        let wallet = wallet_address
            .parse()
            .map_err(|_| BalanceError::InvalidAddress(wallet_address.to_string()))?;

        let network = self
            .registry
            .resolve(network_key)
            .ok_or_else(|| BalanceError::NetworkNotFound(network_key.to_string()))?;

        info!(
            "Fetching balances for address {} on {}",
            wallet, network.name
        );

        if network.tokens.is_empty() {
            return Ok(Vec::new());
        }

        let addresses: Vec<_> = network.tokens.iter().map(|t| t.address).collect();
        let platform = network.name.to_lowercase();

        let (states, prices) = tokio::join!(
            self.reader
                .read_token_states(&network.rpc_url, &wallet, &network.tokens),
            self.price.usd_prices(&platform, &addresses),
        );

        let states = states?;
        let prices = prices.unwrap_or_else(|e| {
            warn!("Price lookup failed, USD values degrade to 0: {}", e);
            HashMap::new()
        });

        let mut records = Vec::with_capacity(network.tokens.len());
        for (token, state) in network.tokens.iter().zip(states) {
            let state = match state {
                Ok(state) => state,
                Err(e) => {
                    warn!("Skipping token {}: {}", token.address, e);
                    continue;
                }
            };

            // A zero raw balance is exactly a zero display balance; no
            // decimal scaling can change that.
            if state.balance.is_zero() {
                continue;
            }

            let price = prices.get(&token.address).copied().unwrap_or(0.0);
            let balance_usd = match usd_value(state.balance, state.decimals, price) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Skipping token {}: {}", token.address, e);
                    continue;
                }
            };

            match TokenBalanceRecord::new(
                &token.address,
                state.name,
                state.symbol,
                state.decimals,
                state.balance,
                balance_usd,
            ) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Dropping record for token {}: {}", token.address, e),
            }
        }

        Ok(records)
    }
}

/// USD value of a raw amount. The raw integer is scaled through exact
/// decimal-string formatting; only the final cosmetic multiply is floating
/// point.
fn usd_value(balance: U256, decimals: u8, price: f64) -> Result<f64, ProviderError> {
    let formatted = format_units(balance, decimals)
        .map_err(|e| ProviderError::ContractData(format!("unscalable amount: {}", e)))?;
    let human: f64 = formatted
        .parse()
        .map_err(|e| ProviderError::ContractData(format!("unparsable amount: {}", e)))?;
    Ok(round_to_cents(human * price))
}
