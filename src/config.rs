use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// JSON document backing the store
    pub data_path: PathBuf,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            data_path: PathBuf::from(var("DATA_PATH", "data.json")),

            log_dir: var("LOG_DIR", "logs"),
            log_level: var("LOG_LEVEL", "debug")
                .parse()
                .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?,
        })
    }
}
