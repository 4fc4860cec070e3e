//! Runtime configuration for taskflow.
//!
//! The client has one real setting: the base URL of the TaskFlow service. It is
//! taken from the environment, with a `.env` file in the working directory (or
//! one of its parents) filling in anything the process environment lacks.
//! Nothing is written back; the client keeps no local state between runs.
//!
//! ## Variables
//!
//! - **`TASKFLOW_BACKEND_URL`** (required): absolute `http`/`https` URL of the
//!   service, without the `/api` suffix
//! - **`TASKFLOW_TIMEOUT_SECS`** (optional): per-request timeout; when unset
//!   requests may wait indefinitely
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::libs::config::Config;
//!
//! let config = Config::read_with(Some("http://localhost:8001"))?;
//! println!("{}", config.api_url);
//! # Ok::<(), taskflow::libs::config::ConfigError>(())
//! ```

use crate::libs::messages::Message;
use reqwest::Url;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const BACKEND_URL_VAR: &str = "TASKFLOW_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "TASKFLOW_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{}", Message::ConfigBackendUrlMissing(.0.clone()))]
    MissingBackendUrl(String),
    #[error("{}", Message::ConfigBackendUrlInvalid(.0.clone()))]
    InvalidBackendUrl(String),
    #[error("{}", Message::ConfigTimeoutInvalid(.0.clone()))]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Service base URL with any trailing slash removed.
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Loads `.env` (if any) into the process environment and reads the
    /// configuration from it.
    pub fn read() -> Result<Config, ConfigError> {
        Self::read_with(None)
    }

    /// Like [`Config::read`], with the `--api-url` flag taking the place of
    /// `TASKFLOW_BACKEND_URL`. The timeout still comes from the environment.
    pub fn read_with(api_url: Option<&str>) -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();
        Self::resolve(|key| env::var(key).ok(), api_url)
    }

    /// Reads configuration from a specific env file. Process environment
    /// variables take precedence over the file, and a missing file is treated
    /// as empty.
    pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
        let file_vars: HashMap<String, String> = match dotenv::from_path_iter(path) {
            Ok(iter) => iter.filter_map(Result::ok).collect(),
            Err(_) => HashMap::new(),
        };
        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup, None)
    }

    /// Builds a configuration from a variable source and an optional URL
    /// override.
    ///
    /// The override wins over `TASKFLOW_BACKEND_URL`; when it is given the
    /// variable is not looked at, so a broken value there does not matter.
    /// `TASKFLOW_TIMEOUT_SECS` applies wherever the URL came from.
    pub fn resolve<F>(lookup: F, api_url: Option<&str>) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = match api_url {
            Some(value) => normalize_url(value)?,
            None => match lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()) {
                Some(value) => normalize_url(&value)?,
                None => return Err(ConfigError::MissingBackendUrl(BACKEND_URL_VAR.to_string())),
            },
        };

        let timeout = match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => None,
        };

        Ok(Config { api_url, timeout })
    }
}

fn normalize_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBackendUrl(value.to_string())),
    }
}
