//! Runtime configuration for the relay and the headless front end.
//!
//! Read from a RON file when one is given; every field falls back to its default.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use sherlock_core::DefaultSelection;
use sherlock_engine::{ForwardSettings, LookupSettings};
use sherlock_logging::LogDestination;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the relay listens on.
    pub listen_addr: SocketAddr,
    /// Remote lookup service the relay forwards to.
    pub upstream_url: String,
    /// Relay the headless front end submits to.
    pub relay_url: String,
    pub catalog_path: PathBuf,
    pub default_selection: DefaultSelection,
    pub export_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub connect_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            upstream_url: "http://api:8000".to_string(),
            relay_url: "http://127.0.0.1:3000".to_string(),
            catalog_path: PathBuf::from("data/sites.json"),
            default_selection: DefaultSelection::default(),
            export_dir: PathBuf::from("."),
            log_destination: LogDestination::default(),
            log_file: PathBuf::from("sherlock.log"),
            connect_timeout_secs: 10,
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_ron_str(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            relay_url: self.relay_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }

    pub fn forward_settings(&self) -> ForwardSettings {
        ForwardSettings {
            upstream_url: self.upstream_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}
