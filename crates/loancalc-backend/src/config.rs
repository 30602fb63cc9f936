use std::net::SocketAddr;

/// Address used when `LOANCALC_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3030";

/// Connection string variables, in order of preference.
pub const DATABASE_URL_VARS: [&str; 2] = ["POSTGRES_URL", "DATABASE_URL"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No database URL configured, set POSTGRES_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    #[error("Invalid LOANCALC_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Takes the first non-empty variable of [`DATABASE_URL_VARS`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        DATABASE_URL_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .map(Self::new)
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup("LOANCALC_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let addr = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: value.clone(),
                source,
            })?;

        Ok(Self { addr })
    }
}
