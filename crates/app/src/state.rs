use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use client::{ClientConfig, ConfigError, DEFAULT_API_URL};

pub const APP_NAME: &str = "dockops";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base url of the dashboard api
    pub api_url: String,
    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Default log level; `RUST_LOG` overrides it
    pub log_level: String,
    /// How long cached reads stay fresh
    pub stale_time_secs: u64,
    /// How long unused cached reads are kept
    pub gc_time_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            log_level: "warn".to_string(),
            stale_time_secs: 30,
            gc_time_secs: 300,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn client_config(&self) -> Result<ClientConfig, StateError> {
        let log_level: tracing::Level = self
            .log_level
            .parse()
            .map_err(|_| StateError::InvalidLogLevel(self.log_level.clone()))?;

        let mut config = ClientConfig::default()
            .with_api_url(&self.api_url)?
            .with_bearer_token(self.token.clone());
        config.stale_time = Duration::from_secs(self.stale_time_secs);
        config.gc_time = Duration::from_secs(self.gc_time_secs);
        config.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        config.log_level = log_level;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the state directory (~/.dockops)
    pub dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// The state directory path (~/.dockops)
    pub fn default_dir() -> Result<PathBuf, StateError> {
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Write a fresh config into `dir`
    pub fn init(dir: PathBuf, config: AppConfig) -> Result<Self, StateError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Err(StateError::AlreadyInitialized(config_path));
        }

        // reject values the client would refuse before anything is written
        config.client_config()?;

        fs::create_dir_all(&dir)?;
        fs::write(&config_path, toml::to_string_pretty(&config)?)?;

        Ok(Self {
            dir,
            config_path,
            config,
        })
    }

    /// Load existing state from `dir`
    pub fn load(dir: PathBuf) -> Result<Self, StateError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            dir,
            config_path,
            config,
        })
    }

    /// Saved config, or the defaults when `init` has not run
    pub fn load_config(dir: &Path) -> Result<AppConfig, StateError> {
        match Self::load(dir.to_path_buf()) {
            Ok(state) => Ok(state.config),
            Err(StateError::NotInitialized) => Ok(AppConfig::default()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("dockops is not initialized. Run 'dockops init' first")]
    NotInitialized,

    #[error("already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("invalid api url: {0}")]
    InvalidApiUrl(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
