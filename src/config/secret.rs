use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// A secret value that is either inlined in the configuration file or
/// resolved from the environment / a mounted file at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SecretSource {
    Plain(String),
    FromEnv {
        #[serde(rename = "fromEnv")]
        from_env: String,
    },
    FromFile {
        #[serde(rename = "fromFile")]
        from_file: String,
    },
}

impl SecretSource {
    pub fn resolve(&self) -> Result<String> {
        match self {
            SecretSource::Plain(value) => Ok(value.clone()),
            SecretSource::FromEnv { from_env } => {
                std::env::var(from_env).map_err(|_| AppError::SecretNotFound(from_env.clone()))
            }
            SecretSource::FromFile { from_file } => fs::read_to_string(from_file)
                .map(|s| s.trim().to_string())
                .map_err(|_| AppError::SecretNotFound(from_file.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_secret() {
        let secret = SecretSource::Plain("hunter2".to_string());
        assert_eq!(secret.resolve().unwrap(), "hunter2");
    }

    #[test]
    fn missing_env_var_is_an_error() {
        let secret = SecretSource::FromEnv {
            from_env: "ALERTGATE_TEST_SECRET_THAT_DOES_NOT_EXIST".to_string(),
        };
        assert!(secret.resolve().is_err());
    }
}
