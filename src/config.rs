// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ApiConfig, CallStyle, Endpoint, api::BASE_URL};

pub const APP_ID: &str = "dev.mariinkys.DexList";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    pub base_url: String,
    /// Name or id of the Pokédex shown on activation
    pub pokedex: String,
    /// Forces a call style instead of the one picked for the platform
    pub call_style: Option<CallStyle>,
    pub dump_responses: bool,
    pub log_level: String,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            pokedex: "2".to_string(),
            call_style: None,
            dump_responses: false,
            log_level: "info".to_string(),
        }
    }
}

impl DexConfig {
    /// Location of the config file, if the platform has a config directory
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron"))
    }

    /// Loads the user config, falling back to the defaults when there is none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            dump_responses: self.dump_responses,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::Pokedex(self.pokedex.clone())
    }
}
