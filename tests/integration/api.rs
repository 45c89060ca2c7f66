//! Route-level tests against the full actix application. Every case here is
//! answerable without touching an RPC endpoint or the price source, so the
//! services point at unroutable addresses on purpose.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::Value;

use token_balance_service::{
    api,
    config::{Config, NetworkFileConfig, TokenFileConfig},
    models::{AppState, PlainOrEnvValue},
    repositories::NetworkRegistry,
    services::{BalanceService, CoinGeckoPriceClient, Erc20Reader},
};

fn test_state() -> AppState {
    let config = Config {
        networks: vec![
            NetworkFileConfig {
                network: "ethereum".to_string(),
                chain_id: 1,
                rpc_url: PlainOrEnvValue::Plain {
                    value: "http://127.0.0.1:1".to_string(),
                },
                tokens: vec![TokenFileConfig {
                    address: "0x6b175474e89094c44da98b954eedeac495271d0f".to_string(),
                    symbol: Some("DAI".to_string()),
                }],
            },
            NetworkFileConfig {
                network: "sepolia".to_string(),
                chain_id: 11155111,
                rpc_url: PlainOrEnvValue::Plain {
                    value: "http://127.0.0.1:1".to_string(),
                },
                tokens: vec![],
            },
        ],
    };
    let registry = Arc::new(NetworkRegistry::from_config(&config).unwrap());

    let balance_service = Arc::new(BalanceService::new(
        registry,
        Erc20Reader::new(1_000),
        CoinGeckoPriceClient::new("http://127.0.0.1:1"),
    ));
    AppState::new(balance_service)
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::ThinData(test_state()))
                .service(web::scope("/v1").configure(api::routes::configure_routes)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_web::test]
async fn test_malformed_address_is_rejected_with_400() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/v1/balances/ethereum/0xnot-an-address")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert!(body["error"].as_str().unwrap().contains("address"));
}

#[actix_web::test]
async fn test_unknown_network_is_rejected_with_404() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/v1/balances/hyperspace/0x1111111111111111111111111111111111111111")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], Value::Bool(false));
}

#[actix_web::test]
async fn test_tokenless_network_returns_empty_array() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/v1/balances/sepolia/0x1111111111111111111111111111111111111111")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/v1/docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["paths"]
        .as_object()
        .unwrap()
        .contains_key("/v1/balances/{network}/{address}"));
}
