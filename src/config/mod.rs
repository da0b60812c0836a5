use crate::constants::{DEFAULT_PORT, DEFAULT_SPORT, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

pub use validation::normalize_host;

/// Configuration structure for the loader.
/// Handles loading, saving, and managing persistent settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Host name of the league service, without scheme or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port of the league service. Defaults to 8080.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HTTP timeout in seconds. When unset, requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Sport assigned to created teams.
    #[serde(default = "default_sport")]
    pub sport: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_sport() -> String {
    DEFAULT_SPORT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            port: default_port(),
            http_timeout_seconds: None,
            log_file_path: None,
            sport: default_sport(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `SPORTIM_HOST` - Override service host
    /// - `SPORTIM_PORT` - Override service port
    /// - `SPORTIM_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SPORTIM_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces file values with any `SPORTIM_*` environment variables that are set.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(host) = std::env::var(env_vars::HOST) {
            self.host = Some(normalize_host(&host));
        }

        if let Ok(port) = std::env::var(env_vars::PORT) {
            self.port = port.trim().parse::<u16>().map_err(|e| {
                AppError::config_error(format!("{} must be a port number: {e}", env_vars::PORT))
            })?;
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            let timeout = timeout.trim().parse::<u64>().map_err(|e| {
                AppError::config_error(format!(
                    "{} must be a number of seconds: {e}",
                    env_vars::HTTP_TIMEOUT
                ))
            })?;
            self.http_timeout_seconds = Some(timeout);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.host.as_deref(),
            self.port,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed. The host is stored without scheme or trailing slash.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            host: self.host.as_deref().map(normalize_host),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Service Host:");
        println!("{}", config.host.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("Service Port:");
        println!("{}", config.port);
        println!("────────────────────────────────────");
        println!("Team Sport:");
        println!("{}", config.sport);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        match config.http_timeout_seconds {
            Some(seconds) => println!("{seconds} seconds"),
            None => println!("none"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}.log", crate::constants::APP_NAME);
            println!("(Default location)");
        }

        Ok(())
    }
}
