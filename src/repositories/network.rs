//! In-memory network registry.
//!
//! Built once from validated configuration and read-only afterwards. Each
//! network is indexed under two keys, its lowercased name and its chain id
//! rendered as a decimal string, so `"ethereum"` and `"1"` resolve to the
//! same descriptor.

use std::{collections::HashMap, sync::Arc};

use crate::{
    config::{Config, ConfigFileError},
    models::{NetworkDescriptor, TokenDescriptor},
};

#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: HashMap<String, Arc<NetworkDescriptor>>,
}

impl NetworkRegistry {
    /// Resolves every configured network (including env-sourced RPC URLs)
    /// and builds the dual-keyed index. Errors abort startup.
    pub fn from_config(config: &Config) -> Result<Self, ConfigFileError> {
        config.validate()?;

        let mut networks = HashMap::with_capacity(config.networks.len() * 2);
        for entry in &config.networks {
            let descriptor = Arc::new(entry.resolve()?);
            networks.insert(descriptor.name.to_lowercase(), descriptor.clone());
            networks.insert(descriptor.chain_id.to_string(), descriptor);
        }

        Ok(Self { networks })
    }

    /// Looks up a network by name or chain-id string, case-insensitively.
    pub fn resolve(&self, key: &str) -> Option<Arc<NetworkDescriptor>> {
        self.networks.get(&key.trim().to_lowercase()).cloned()
    }

    /// The tracked token set of a network, in declaration order. `None` for
    /// unknown networks; an empty slice is a valid answer for a known
    /// network tracking nothing.
    pub fn tokens_of(&self, key: &str) -> Option<Vec<TokenDescriptor>> {
        self.resolve(key).map(|network| network.tokens.clone())
    }

    /// Number of distinct networks (not index entries).
    pub fn len(&self) -> usize {
        self.networks.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
