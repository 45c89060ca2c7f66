//! USD spot prices for token contracts.
//!
//! One request per balance lookup, carrying the full address set. The price
//! source is best-effort enrichment: the aggregator treats a missing entry
//! as price 0 and a failed request as an empty quote map, so this service
//! can never fail a balance request.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::{constants::USD_CURRENCY, models::EvmAddress};

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Price request failed: {0}")]
    Request(String),
    #[error("Unexpected price response: {0}")]
    Response(String),
}

/// Quotes current USD prices for a set of token contracts on one platform.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait TokenPriceService: Send + Sync {
    async fn usd_prices(
        &self,
        platform: &str,
        addresses: &[EvmAddress],
    ) -> Result<HashMap<EvmAddress, f64>, PriceError>;
}

/// CoinGecko-style `simple/token_price/{platform}` client.
pub struct CoinGeckoPriceClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoPriceClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TokenPriceService for CoinGeckoPriceClient {
    async fn usd_prices(
        &self,
        platform: &str,
        addresses: &[EvmAddress],
    ) -> Result<HashMap<EvmAddress, f64>, PriceError> {
        if addresses.is_empty() {
            return Ok(HashMap::new());
        }

        let contract_addresses = addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/simple/token_price/{}", self.base_url, platform);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("contract_addresses", contract_addresses.as_str()),
                ("vs_currencies", USD_CURRENCY),
            ])
            .send()
            .await
            .map_err(|e| PriceError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| PriceError::Request(e.to_string()))?;

        let body: HashMap<String, HashMap<String, f64>> = response
            .json()
            .await
            .map_err(|e| PriceError::Response(e.to_string()))?;

        Ok(parse_price_map(body))
    }
}

/// Maps the source's `{address: {currency: price}}` body onto typed
/// addresses. Entries with unparseable keys or no USD quote are dropped;
/// the aggregator defaults those to 0.
fn parse_price_map(body: HashMap<String, HashMap<String, f64>>) -> HashMap<EvmAddress, f64> {
    body.into_iter()
        .filter_map(|(address, quotes)| {
            let address = EvmAddress::parse(&address).ok()?;
            let price = quotes.get(USD_CURRENCY).copied()?;
            Some((address, price))
        })
        .collect()
}
