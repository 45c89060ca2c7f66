//! Configuration loading end to end: file on disk, env-sourced RPC URLs,
//! registry construction.

use std::{env, io::Write, sync::Mutex};

use lazy_static::lazy_static;
use tempfile::NamedTempFile;

use token_balance_service::{
    config::{load_config, ConfigFileError},
    repositories::NetworkRegistry,
};

// Use a mutex to ensure tests don't run in parallel when modifying env vars
lazy_static! {
    static ref ENV_MUTEX: Mutex<()> = Mutex::new(());
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

const ENV_SOURCED_CONFIG: &str = r#"{
    "networks": [
        {
            "network": "ethereum",
            "chain_id": 1,
            "rpc_url": {"type": "env", "value": "IT_ETHEREUM_RPC_URL"},
            "tokens": [
                {"address": "0x6b175474e89094c44da98b954eedeac495271d0f", "symbol": "DAI"}
            ]
        }
    ]
}"#;

#[test]
fn test_env_sourced_rpc_url_resolves_into_registry() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("IT_ETHEREUM_RPC_URL", "https://rpc.example.com");

    let file = write_config(ENV_SOURCED_CONFIG);
    let config = load_config(file.path().to_str().unwrap()).unwrap();
    let registry = NetworkRegistry::from_config(&config).unwrap();

    let network = registry.resolve("ethereum").unwrap();
    assert_eq!(network.rpc_url, "https://rpc.example.com");
    assert_eq!(registry.resolve("1").unwrap(), network);

    env::remove_var("IT_ETHEREUM_RPC_URL");
}

#[test]
fn test_unset_env_var_fails_registry_construction() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("IT_ETHEREUM_RPC_URL");

    let file = write_config(ENV_SOURCED_CONFIG);
    let config = load_config(file.path().to_str().unwrap()).unwrap();

    let result = NetworkRegistry::from_config(&config);
    assert!(matches!(result, Err(ConfigFileError::MissingEnvVar(_))));
}

#[test]
fn test_duplicate_network_name_fails_load() {
    let file = write_config(
        r#"{
            "networks": [
                {
                    "network": "ethereum",
                    "chain_id": 1,
                    "rpc_url": {"type": "plain", "value": "http://localhost:8545"}
                },
                {
                    "network": "ETHEREUM",
                    "chain_id": 2,
                    "rpc_url": {"type": "plain", "value": "http://localhost:8546"}
                }
            ]
        }"#,
    );

    let result = load_config(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigFileError::DuplicateEntry(_))));
}

#[test]
fn test_unknown_field_fails_load() {
    let file = write_config(
        r#"{
            "networks": [
                {
                    "network": "ethereum",
                    "chain_id": 1,
                    "rpc_url": {"type": "plain", "value": "http://localhost:8545"},
                    "surprise": true
                }
            ]
        }"#,
    );

    let result = load_config(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigFileError::JsonError(_))));
}

#[test]
fn test_shipped_config_file_is_loadable() {
    // The example config in-tree must always stay structurally valid.
    let config = load_config("config/config.json").unwrap();
    assert_eq!(config.networks.len(), 3);
}
