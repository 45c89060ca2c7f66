use thiserror::Error;

use crate::services::ProviderError;

/// Failures the aggregation engine surfaces to its caller. Per-token read
/// failures and price-source failures are handled inside the engine and
/// never appear here.
#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Network {0} not supported")]
    NetworkNotFound(String),

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}
