//! On-chain token state reads.
//!
//! For every tracked token the reader fetches balance, decimals, symbol and
//! name for one wallet. All reads for a request go out as a single JSON-RPC
//! batch so the whole set is close to point-in-time consistent; if the batch
//! round-trip itself fails, the reader falls back to per-token requests with
//! the four reads of each token issued concurrently.
//!
//! A failing token (reverting contract, non-standard return data, timeout)
//! only loses its own entry. The remaining tokens still produce state.

use alloy::{
    primitives::{Bytes, TxKind, U256},
    rpc::types::{TransactionInput, TransactionRequest},
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;
use log::warn;

use crate::{
    constants::READS_PER_TOKEN,
    models::{EvmAddress, RawTokenState, TokenDescriptor},
    services::{EvmProvider, ProviderError},
};

#[cfg(test)]
use mockall::automock;

sol! {
    /// Read-only subset of the ERC-20 interface.
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
        function name() external view returns (string);
    }
}

/// Reads raw per-token contract state for a wallet.
///
/// Implementations must return exactly one result per input token, in input
/// order. The outer error is reserved for failures that prevent any read at
/// all (e.g. an unusable endpoint).
#[async_trait]
#[cfg_attr(test, automock)]
pub trait TokenStateReader: Send + Sync {
    async fn read_token_states(
        &self,
        rpc_url: &str,
        wallet: &EvmAddress,
        tokens: &[TokenDescriptor],
    ) -> Result<Vec<Result<RawTokenState, ProviderError>>, ProviderError>;
}

/// `TokenStateReader` over ERC-20 contracts via `eth_call`.
#[derive(Debug, Clone)]
pub struct Erc20Reader {
    timeout_ms: u64,
}

impl Erc20Reader {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    /// The four read calls for one token, in the fixed order expected by
    /// [`decode_token_state`].
    fn token_calls(wallet: &EvmAddress, token: &TokenDescriptor) -> Vec<TransactionRequest> {
        let calldata: [Vec<u8>; READS_PER_TOKEN] = [
            IERC20::balanceOfCall {
                owner: wallet.inner(),
            }
            .abi_encode(),
            IERC20::decimalsCall {}.abi_encode(),
            IERC20::symbolCall {}.abi_encode(),
            IERC20::nameCall {}.abi_encode(),
        ];

        calldata
            .into_iter()
            .map(|data| TransactionRequest {
                to: Some(TxKind::Call(token.address.inner())),
                input: TransactionInput::new(Bytes::from(data)),
                ..Default::default()
            })
            .collect()
    }

    async fn read_single(
        &self,
        provider: &EvmProvider,
        wallet: &EvmAddress,
        token: &TokenDescriptor,
    ) -> Result<RawTokenState, ProviderError> {
        let calls = Self::token_calls(wallet, token);
        let (balance, decimals, symbol, name) = tokio::try_join!(
            provider.call(&calls[0]),
            provider.call(&calls[1]),
            provider.call(&calls[2]),
            provider.call(&calls[3]),
        )?;

        decode_token_state(&balance, &decimals, &symbol, &name)
    }
}

#[async_trait]
impl TokenStateReader for Erc20Reader {
    async fn read_token_states(
        &self,
        rpc_url: &str,
        wallet: &EvmAddress,
        tokens: &[TokenDescriptor],
    ) -> Result<Vec<Result<RawTokenState, ProviderError>>, ProviderError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let provider = EvmProvider::new(rpc_url, self.timeout_ms)?;

        let calls: Vec<TransactionRequest> = tokens
            .iter()
            .flat_map(|token| Self::token_calls(wallet, token))
            .collect();

        match provider.call_many(&calls).await {
            Ok(responses) => Ok(responses
                .chunks(READS_PER_TOKEN)
                .map(|chunk| match chunk {
                    [Ok(balance), Ok(decimals), Ok(symbol), Ok(name)] => {
                        decode_token_state(balance, decimals, symbol, name)
                    }
                    _ => Err(first_call_error(chunk)),
                })
                .collect()),
            Err(batch_error) => {
                warn!(
                    "Batch eth_call round-trip failed ({}), falling back to per-token reads",
                    batch_error
                );
                let reads = tokens
                    .iter()
                    .map(|token| self.read_single(&provider, wallet, token));
                Ok(futures::future::join_all(reads).await)
            }
        }
    }
}

fn first_call_error(chunk: &[Result<Bytes, ProviderError>]) -> ProviderError {
    chunk
        .iter()
        .find_map(|result| result.as_ref().err())
        .map(|e| ProviderError::RpcError(e.to_string()))
        .unwrap_or_else(|| ProviderError::ContractData("incomplete batch response".to_string()))
}

/// Decodes the four ABI-encoded return payloads into a [`RawTokenState`].
/// Tokens returning non-standard data (e.g. bytes32 symbols) fail here and
/// are skipped upstream.
fn decode_token_state(
    balance: &Bytes,
    decimals: &Bytes,
    symbol: &Bytes,
    name: &Bytes,
) -> Result<RawTokenState, ProviderError> {
    let balance: U256 = IERC20::balanceOfCall::abi_decode_returns(balance, true)
        .map_err(|e| ProviderError::ContractData(format!("balanceOf: {}", e)))?
        ._0;
    let decimals: u8 = IERC20::decimalsCall::abi_decode_returns(decimals, true)
        .map_err(|e| ProviderError::ContractData(format!("decimals: {}", e)))?
        ._0;
    let symbol: String = IERC20::symbolCall::abi_decode_returns(symbol, true)
        .map_err(|e| ProviderError::ContractData(format!("symbol: {}", e)))?
        ._0;
    let name: String = IERC20::nameCall::abi_decode_returns(name, true)
        .map_err(|e| ProviderError::ContractData(format!("name: {}", e)))?
        ._0;

    Ok(RawTokenState {
        balance,
        decimals,
        symbol,
        name,
    })
}
