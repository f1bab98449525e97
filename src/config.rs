use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Tag of the node wrapping all rendered blocks.
    pub root_tag: String,
    pub strip_frontmatter: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            strip_frontmatter: true,
        }
    }
}

impl Config {
    /// The settings bundled into the binary from `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs has already rejected a malformed bundled file
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if it is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::compiled_default(),
            Err(err) => {
                warn!("{err}; falling back to default config");
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file. Returns `Ok(None)` when the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }
}
