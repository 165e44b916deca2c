//! Engine Configuration
//!
//! Per-deployment defaults for the trajectory engine, loaded from a TOML
//! file. Every field is optional in the file; missing keys fall back to the
//! documented defaults so a partial config behaves identically to the
//! built-in one.
//!
//! ## Loading Order
//!
//! 1. `WELLPATH_CONFIG` environment variable (path to TOML file)
//! 2. `wellpath.toml` in the current working directory
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::alignment::GridSpec;
use crate::types::DepthUnit;

/// Errors loading an engine configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration for a trajectory-engine deployment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Depth unit convention applied to surveys without an explicit unit
    #[serde(default)]
    pub unit: DepthUnit,

    /// Initial true vertical depth anchoring every integration (typically 0)
    #[serde(default)]
    pub tvd0: f64,

    /// Reference grid parameters
    #[serde(default)]
    pub grid: GridSpec,
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `WELLPATH_CONFIG` environment variable
    /// 2. `./wellpath.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("WELLPATH_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded engine config from WELLPATH_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLPATH_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLPATH_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./wellpath.toml
        let local = Path::new("wellpath.toml");
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = %local.display(), "Loaded engine config from working directory");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse ./wellpath.toml, using defaults");
                }
            }
        }

        // 3. Built-in defaults
        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Load and parse a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
