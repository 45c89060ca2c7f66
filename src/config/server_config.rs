/// Configuration for the server process, read from environment variables.
use std::env;

use crate::constants::{DEFAULT_PRICE_API_URL, DEFAULT_RPC_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The file path to the network configuration file.
    pub config_file_path: String,
    /// Timeout in milliseconds for outbound RPC requests.
    pub rpc_timeout_ms: u64,
    /// Base URL of the spot-price API.
    pub price_api_url: String,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `CONFIG_DIR` defaults to `"./config"`, `CONFIG_FILE_NAME` to
    ///   `"config.json"`.
    /// - `RPC_TIMEOUT_MS` defaults to 30000.
    /// - `PRICE_API_URL` defaults to the public CoinGecko v3 endpoint.
    pub fn from_env() -> Self {
        let conf_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
        let conf_dir = format!("{}/", conf_dir.trim_end_matches('/'));

        let config_file_name =
            env::var("CONFIG_FILE_NAME").unwrap_or_else(|_| "config.json".to_string());

        let config_file_path = format!("{}{}", conf_dir, config_file_name);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            config_file_path,
            rpc_timeout_ms: env::var("RPC_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RPC_TIMEOUT_MS),
            price_api_url: env::var("PRICE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PRICE_API_URL.to_string()),
        }
    }
}
