//! # Models Module
//!
//! Core data structures and type definitions for the balance service.

mod address;
pub use address::*;

mod network;
pub use network::*;

mod balance;
pub use balance::*;

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod plain_or_env_value;
pub use plain_or_env_value::*;

mod error;
pub use error::*;
