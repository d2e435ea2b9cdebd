//! Launcher configuration file.
//!
//! An optional `rlaunch.toml` in the project root supplies configuration
//! parameters and default filters:
//!
//! ```toml
//! engines = ["junit5"]
//! include-tags = ["fast"]
//! exclude-tags = ["slow"]
//!
//! [parameters]
//! "junit.parallel" = "true"
//! ```
//!
//! Each filter list is only a default. The launcher replaces it when the
//! same option is given on the command line.

use crate::request::DiscoveryRequestBuilder;
use log::{debug, warn};
use rlaunch_core::{EngineIdFilter, RequestError, TagFilter};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "rlaunch.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LauncherConfig {
    pub engines: Vec<String>,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub parameters: BTreeMap<String, String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl LauncherConfig {
    /// Parse configuration text; `origin` only labels errors and warnings.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        for key in config.unknown.keys() {
            warn!("Ignoring unknown key '{key}' in {}", origin.display());
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Load `rlaunch.toml` from `root`, or the empty configuration if there is none.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {CONFIG_FILE_NAME} in {}", root.display());
            return Ok(Self::default());
        }
        debug!("Loading launcher configuration from {}", path.display());
        Self::from_file(&path)
    }

    /// Keys present in the file but not understood
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    pub fn apply_to(&self, builder: &mut DiscoveryRequestBuilder) -> Result<(), ConfigError> {
        for engine in &self.engines {
            builder.filter([EngineIdFilter::try_by_engine_id(engine.as_str())?]);
        }
        if !self.include_tags.is_empty() {
            builder.filter([TagFilter::include_tags(&self.include_tags)?]);
        }
        if !self.exclude_tags.is_empty() {
            builder.filter([TagFilter::exclude_tags(&self.exclude_tags)?]);
        }
        builder.configuration_parameters(&self.parameters)?;
        Ok(())
    }
}
