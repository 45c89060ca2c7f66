//! EVM Provider implementation for interacting with EVM-compatible blockchain networks.
//!
//! Wraps an alloy HTTP provider and exposes the two read shapes the balance
//! engine needs: a single `eth_call` and a batched set of `eth_call`s sent
//! in one JSON-RPC round-trip.

use std::time::Duration;

use alloy::{
    primitives::Bytes,
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{
        client::ClientBuilder,
        types::{BlockNumberOrTag, TransactionRequest},
    },
    transports::{
        http::{Client, Http},
        TransportError,
    },
};
use reqwest::ClientBuilder as ReqwestClientBuilder;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
    #[error("RPC transport error: {0}")]
    Transport(String),
    #[error("RPC call error: {0}")]
    RpcError(String),
    #[error("Contract data error: {0}")]
    ContractData(String),
}

impl From<TransportError> for ProviderError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::ErrorResp(payload) => Self::RpcError(payload.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Provider for one network's RPC endpoint, built per request from the
/// registry's resolved URL.
#[derive(Clone)]
pub struct EvmProvider {
    provider: RootProvider<Http<Client>>,
}

impl EvmProvider {
    pub fn new(rpc_url: &str, timeout_ms: u64) -> Result<Self, ProviderError> {
        let url = rpc_url.parse().map_err(|e| {
            ProviderError::NetworkConfiguration(format!("Invalid URL format: {}", e))
        })?;

        let client = ReqwestClientBuilder::default()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::NetworkConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        let mut transport = Http::new(url);
        transport.set_client(client);

        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);
        let provider = ProviderBuilder::new().on_client(client);

        Ok(Self { provider })
    }

    /// Executes a single `eth_call` against the latest block.
    pub async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError> {
        self.provider.call(tx).await.map_err(ProviderError::from)
    }

    /// Executes every call in one JSON-RPC batch round-trip, preserving
    /// input order. The outer error means the batch itself never made it to
    /// the endpoint; inner errors are scoped to individual calls.
    pub async fn call_many(
        &self,
        txs: &[TransactionRequest],
    ) -> Result<Vec<Result<Bytes, ProviderError>>, ProviderError> {
        let client = self.provider.client();
        let mut batch = client.new_batch();

        let mut waiters = Vec::with_capacity(txs.len());
        for tx in txs {
            let waiter = batch
                .add_call::<_, Bytes>("eth_call", &(tx.clone(), BlockNumberOrTag::Latest))
                .map_err(ProviderError::from)?;
            waiters.push(waiter);
        }

        batch.send().await.map_err(ProviderError::from)?;

        let mut results = Vec::with_capacity(waiters.len());
        for waiter in waiters {
            results.push(waiter.await.map_err(ProviderError::from));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_url() {
        let provider = EvmProvider::new("http://localhost:8545", 5_000);
        assert!(provider.is_ok());
    }

    #[test]
    fn test_new_with_invalid_url() {
        let result = EvmProvider::new("not a url", 5_000);
        assert!(matches!(result, Err(ProviderError::NetworkConfiguration(_))));
    }

    #[test]
    fn test_transport_error_mapping() {
        let err: ProviderError = TransportError::NullResp.into();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
