//! Read-only stores built from configuration at startup.

mod network;
pub use network::*;
