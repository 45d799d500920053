use crate::utils::BootstrapError;
use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_APP_USERNAME: &str = "appuser";

/// Everything the bootstrap needs, resolved before any connection is opened
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl BootstrapConfig {
    /// Reads MONGODB_URI, MONGO_DATABASE, MONGO_APP_USERNAME and MONGO_APP_PASSWORD
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BootstrapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = required(&lookup, "MONGO_DATABASE")?;
        let password = required(&lookup, "MONGO_APP_PASSWORD")?;

        let mongodb_uri = optional(&lookup, "MONGODB_URI")
            .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());
        let username = optional(&lookup, "MONGO_APP_USERNAME")
            .unwrap_or_else(|| DEFAULT_APP_USERNAME.to_string());

        Ok(Self {
            mongodb_uri,
            database,
            username,
            password,
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    // Vazio ou só espaços conta como ausente; o valor segue sem alteração
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String, BootstrapError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key)
        .ok_or_else(|| BootstrapError::ConfigurationError(format!("{} must be set", key)))
}
