//! This module defines the HTTP route for token balance lookups.
//! The route is integrated with the Actix-web framework and delegates to the
//! balance controller.
use actix_web::{get, web, HttpResponse};

use crate::{
    api::controllers::balance,
    models::{ApiError, ApiResponse, AppState, TokenBalanceRecord},
};

/// Lists the ERC-20 balances a wallet holds on a network.
#[utoipa::path(
    get,
    path = "/v1/balances/{network}/{address}",
    tag = "Balances",
    operation_id = "getTokenBalances",
    params(
        ("network" = String, Path, description = "Network name or chain id, case-insensitive (e.g. `ethereum` or `1`)"),
        ("address" = String, Path, description = "Wallet address, 0x-prefixed 40-character hex")
    ),
    responses(
        (
            status = 200,
            description = "Non-zero balances for every tracked token, in registry order",
            body = Vec<TokenBalanceRecord>
        ),
        (
            status = 400,
            description = "Malformed wallet address",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Invalid wallet address"
            })
        ),
        (
            status = 404,
            description = "Unknown network",
            body = ApiResponse<String>,
            example = json!({
                "success": false,
                "data": null,
                "error": "Network not supported"
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ApiResponse<String>
        ),
    )
)]
#[get("/balances/{network}/{address}")]
pub async fn get_token_balances(
    path: web::Path<(String, String)>,
    data: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (network, address) = path.into_inner();
    balance::token_balances(&network, &address, data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_token_balances);
}
