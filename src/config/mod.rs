//! Configuration management: process settings from the environment and the
//! network registry file from disk.

mod error;
pub use error::*;

mod server_config;
pub use server_config::*;

mod config_file;
pub use config_file::*;
