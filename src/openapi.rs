use crate::{
    api::routes::{balance, health},
    models::TokenBalanceRecord,
};
use utoipa::OpenApi;

/// # OpenAPI Specification
///
/// Aggregates the annotated paths and schemas of the token balance API.
#[derive(OpenApi)]
#[openapi(
    tags(
      (name = "Balances", description = "ERC-20 token balances per wallet and network, with best-effort USD values."),
      (name = "Health", description = "Service liveness.")
    ),
    info(
        description = "Read-only API serving ERC-20 token balances with USD values across EVM networks",
        version = "0.1.0",
        title = "Token Balance Service API",
    ),
    paths(balance::get_token_balances, health::health),
    components(schemas(TokenBalanceRecord))
)]
pub struct ApiDoc;
