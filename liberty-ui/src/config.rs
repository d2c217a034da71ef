use liberty_client::alloy_primitives::Address;
use liberty_client::contract::DEFAULT_DEPOSIT_CONTRACT;
use liberty_client::{data_dir, ChainSettings};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "liberty.config.json";

#[derive(Debug)]
pub enum ConfigError {
    InvalidConfig,
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => write!(f, "Config file is invalid"),
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerdeError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeError(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub rpc_url: String,
    pub deposit_contract: Address,
    pub confirmations: u64,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            deposit_contract: DEFAULT_DEPOSIT_CONTRACT,
            confirmations: 1,
            poll_interval_ms: 2_000,
        }
    }
}

impl Config {
    pub fn chain_settings(&self) -> ChainSettings {
        ChainSettings {
            rpc_url: self.rpc_url.clone(),
            deposit_contract: self.deposit_contract,
            confirmations: self.confirmations,
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

pub fn read_config() -> Result<Config, ConfigError> {
    read_config_from(&config_path())
}

pub fn read_config_from(config_path: &Path) -> Result<Config, ConfigError> {
    // if no config file, return default config
    if !config_path.exists() {
        let config = Config::default();
        // create default config file if we don't have one
        write_config_to(config_path, &config)?;
        return Ok(config);
    } else if !config_path.is_file() {
        // if config is not a file, throw an error
        return Err(ConfigError::InvalidConfig);
    }

    let data = std::fs::read_to_string(config_path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn write_config_to(config_path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(root) = config_path.parent() {
        std::fs::create_dir_all(root)?;
    }
    let json_string = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path, json_string)?;

    Ok(())
}
