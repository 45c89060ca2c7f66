//! # Token Balance Service
//!
//! A read-only API serving ERC-20 token balances with USD values across EVM
//! networks.
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - An HTTP endpoint for balance lookups
//! - An immutable network registry loaded from configuration
//! - Batched on-chain reads joined with spot prices per request
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use token_balance_service::{
    api,
    config::{self, ServerConfig},
    logging::setup_logging,
    models::AppState,
    repositories::NetworkRegistry,
    services::{BalanceService, CoinGeckoPriceClient, Erc20Reader},
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging();

    let server_config = ServerConfig::from_env();

    // Misconfiguration is fatal here, before the server ever binds.
    let config_file = config::load_config(&server_config.config_file_path)
        .wrap_err("Failed to load config file")?;
    let registry = Arc::new(
        NetworkRegistry::from_config(&config_file).wrap_err("Failed to build network registry")?,
    );
    info!("Loaded {} network(s)", registry.len());

    let balance_service = Arc::new(BalanceService::new(
        registry,
        Erc20Reader::new(server_config.rpc_timeout_ms),
        CoinGeckoPriceClient::new(&server_config.price_api_url),
    ));
    let app_state = AppState::new(balance_service);

    info!(
        "Starting server on {}:{}",
        server_config.host, server_config.port
    );
    let bind_address = (server_config.host.clone(), server_config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(web::ThinData(app_state.clone()))
            .service(web::scope("/v1").configure(api::routes::configure_routes))
    })
    .bind(bind_address)
    .wrap_err_with(|| {
        format!(
            "Failed to bind server to {}:{}",
            server_config.host, server_config.port
        )
    })?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
