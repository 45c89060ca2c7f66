//! Configuration values that may come from the deployment environment.
//!
//! The config file can either carry a value directly ("plain") or name an
//! environment variable to read it from ("env"). Env values are resolved
//! once at startup, so a missing variable fails fast instead of surfacing
//! per-request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlainOrEnvValueError {
    #[error("Missing env var: {0}")]
    MissingEnvVar(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlainOrEnvValue {
    Env { value: String },
    Plain { value: String },
}

impl PlainOrEnvValue {
    pub fn get_value(&self) -> Result<String, PlainOrEnvValueError> {
        match self {
            PlainOrEnvValue::Env { value } => std::env::var(value).map_err(|_| {
                PlainOrEnvValueError::MissingEnvVar(format!(
                    "Environment variable {} not found",
                    value
                ))
            }),
            PlainOrEnvValue::Plain { value } => Ok(value.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.get_value() {
            Ok(v) => v.is_empty(),
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, sync::Mutex};

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_plain_value_get_value() {
        let plain = PlainOrEnvValue::Plain {
            value: "https://rpc.example.com".to_string(),
        };
        assert_eq!(plain.get_value().unwrap(), "https://rpc.example.com");
    }

    #[test]
    fn test_env_value_get_value_when_env_exists() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var("TEST_RPC_URL_VAR", "https://rpc.from-env.example.com");

        let env_value = PlainOrEnvValue::Env {
            value: "TEST_RPC_URL_VAR".to_string(),
        };
        assert_eq!(
            env_value.get_value().unwrap(),
            "https://rpc.from-env.example.com"
        );

        env::remove_var("TEST_RPC_URL_VAR");
    }

    #[test]
    fn test_env_value_get_value_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let env_value = PlainOrEnvValue::Env {
            value: "DEFINITELY_NOT_SET_VAR".to_string(),
        };
        assert!(matches!(
            env_value.get_value(),
            Err(PlainOrEnvValueError::MissingEnvVar(_))
        ));
        assert!(env_value.is_empty());
    }

    #[test]
    fn test_deserializes_tagged_form() {
        let parsed: PlainOrEnvValue =
            serde_json::from_str(r#"{"type": "env", "value": "ETHEREUM_RPC_URL"}"#).unwrap();
        assert_eq!(
            parsed,
            PlainOrEnvValue::Env {
                value: "ETHEREUM_RPC_URL".to_string()
            }
        );

        let parsed: PlainOrEnvValue =
            serde_json::from_str(r#"{"type": "plain", "value": "http://localhost:8545"}"#).unwrap();
        assert_eq!(
            parsed,
            PlainOrEnvValue::Plain {
                value: "http://localhost:8545".to_string()
            }
        );
    }
}
