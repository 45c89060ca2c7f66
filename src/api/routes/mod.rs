//! # API Routes Module
//!
//! Configures HTTP routes for the balance service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/balances/{network}/{address}` - Token balance lookup
//! * `/docs/openapi.json` - OpenAPI document

pub mod balance;
pub mod docs;
pub mod health;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(balance::init)
        .configure(docs::init);
}
