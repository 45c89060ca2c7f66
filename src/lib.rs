//! Token Balance Service Library
//!
//! A read-only aggregation service answering one question: which ERC-20
//! token balances, with USD value, does a wallet hold on a network?
//!
//! It joins two external sources per request: the network's JSON-RPC
//! endpoint for on-chain token state (batched `eth_call`s) and a spot-price
//! API for best-effort USD values.
//!
//! # Module Structure
//!
//! - `config`: Process settings and the network configuration file
//! - `logging`: Logging setup
//! - `models`: Data structures, validated records and error types
//! - `repositories`: The in-memory network registry
//! - `services`: RPC provider, on-chain reader, price client and the
//!   aggregation engine
//! - `api`: HTTP routes and controllers
//! - `utils`: Common helpers

pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState};
