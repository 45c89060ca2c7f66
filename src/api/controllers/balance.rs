//! # Balance Controller
//!
//! Handles the HTTP endpoint for token balance lookups: input validation at
//! the boundary, then delegation to the aggregation engine.
use actix_web::{web, HttpResponse};

use crate::models::{ApiError, AppState, EvmAddress};

/// Validates the path parameters and returns the wallet's token balances on
/// the given network as a JSON array.
pub async fn token_balances(
    network: &str,
    address: &str,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    if network.trim().is_empty() {
        return Err(ApiError::BadRequest("network must not be empty".to_string()));
    }
    // Reject malformed addresses before any engine work happens.
    EvmAddress::parse(address)
        .map_err(|e| ApiError::BadRequest(format!("Invalid wallet address: {}", e)))?;

    let records = state
        .balance_service
        .get_token_balances(network, address)
        .await?;

    Ok(HttpResponse::Ok().json(records))
}
