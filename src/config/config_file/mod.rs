//! Loading and validation of the network configuration file.
//!
//! The file is JSON with a single `networks` array. It is parsed and
//! validated once at startup; any problem (unreadable file, malformed JSON,
//! structural errors, duplicate networks) aborts startup so the service
//! never runs against a configuration it cannot trust.

use std::{collections::HashSet, fs};

use serde::{Deserialize, Serialize};

use crate::config::ConfigFileError;

mod network;
pub use network::*;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub networks: Vec<NetworkFileConfig>,
}

impl Config {
    /// Validates every network entry and rejects duplicate names or chain
    /// ids. Names are compared case-insensitively because lookups are.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.networks.is_empty() {
            return Err(ConfigFileError::MissingField("networks".into()));
        }

        let mut names = HashSet::new();
        let mut chain_ids = HashSet::new();
        for network in &self.networks {
            network.validate()?;

            if !names.insert(network.network.to_lowercase()) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Network name {} declared twice",
                    network.network
                )));
            }
            if !chain_ids.insert(network.chain_id) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Chain id {} declared twice",
                    network.chain_id
                )));
            }
        }

        Ok(())
    }
}

/// Reads, parses and validates the configuration file at `path`.
pub fn load_config(path: &str) -> Result<Config, ConfigFileError> {
    if !std::path::Path::new(path).exists() {
        return Err(ConfigFileError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    config.validate()?;

    Ok(config)
}
