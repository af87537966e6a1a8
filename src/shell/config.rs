use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_FILE_VAR: &str = "TIME_TRACKING_DATA_FILE";
pub const BIND_ADDRESS_VAR: &str = "TIME_TRACKING_BIND_ADDRESS";
pub const TIME_APP_DIR_VAR: &str = "TIME_TRACKING_TIME_APP_DIR";
pub const ADMIN_APP_DIR_VAR: &str = "TIME_TRACKING_ADMIN_APP_DIR";
pub const LOG_VAR: &str = "TIME_TRACKING_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address `{value}` in {key}: {source}")]
    InvalidBindAddress {
        key: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Directories holding the two prebuilt browser bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub time_app_dir: PathBuf,
    pub admin_app_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            time_app_dir: PathBuf::from("Time_tracking"),
            admin_app_dir: PathBuf::from("Admin_App"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub bind_address: SocketAddr,
    pub frontend: FrontendConfig,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            bind_address: SocketAddr::from(([0, 0, 0, 0], 5000)),
            frontend: FrontendConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = read(DATA_FILE_VAR) {
            config.data_file = PathBuf::from(value);
        }
        if let Some(value) = read(BIND_ADDRESS_VAR) {
            config.bind_address =
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddress {
                        key: BIND_ADDRESS_VAR,
                        value: value.clone(),
                        source,
                    })?;
        }
        if let Some(value) = read(TIME_APP_DIR_VAR) {
            config.frontend.time_app_dir = PathBuf::from(value);
        }
        if let Some(value) = read(ADMIN_APP_DIR_VAR) {
            config.frontend.admin_app_dir = PathBuf::from(value);
        }
        if let Some(value) = read(LOG_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }
}
