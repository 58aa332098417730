//! Configuration loading for Tether.
//!
//! Reads `~/.tether/config.toml` (or the file named by `TETHER_CONFIG`) and
//! resolves it into [`TetherConfig`]. Validation happens at the parse
//! boundary: the resolved types in `tether-types` are constructed through
//! `#[serde(try_from)]`, so a loaded config is a valid config.
//!
//! ```toml
//! [binding]
//! transitions = "strict"
//!
//! [engine_versions]
//! mysql = ["5.6", "5.7"]
//! postgresql = ["9.6"]
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

use tether_types::{BindingSettings, EngineVersionPolicy, TransitionMode};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TETHER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<de::Error>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    binding: Option<BindingSettings>,
    engine_versions: Option<EngineVersionPolicy>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TetherConfig {
    binding: BindingSettings,
    engine_versions: EngineVersionPolicy,
}

impl From<RawConfig> for TetherConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            binding: raw.binding.unwrap_or_default(),
            engine_versions: raw.engine_versions.unwrap_or_default(),
        }
    }
}

impl TetherConfig {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No home directory; using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::resolve(path, &content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found; using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(read_error(path, source)),
        }
    }

    /// Load from a path named explicitly by the user. A missing file is an
    /// error.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
        Self::resolve(path, &content)
    }

    fn resolve(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(content).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Config file unparseable");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: Box::new(source),
            }
        })?;
        tracing::debug!(
            path = %path.display(),
            transitions = %config.transitions(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Parse TOML text into a resolved config.
    pub fn parse(content: &str) -> Result<Self, de::Error> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(raw.into())
    }

    #[must_use]
    pub fn transitions(&self) -> TransitionMode {
        self.binding.transitions()
    }

    #[must_use]
    pub fn binding(&self) -> &BindingSettings {
        &self.binding
    }

    #[must_use]
    pub fn engine_versions(&self) -> &EngineVersionPolicy {
        &self.engine_versions
    }

    #[must_use]
    pub fn with_transitions(mut self, mode: TransitionMode) -> Self {
        self.binding = BindingSettings::new(mode);
        self
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn read_error(path: &Path, source: io::Error) -> ConfigError {
    tracing::warn!(path = %path.display(), error = %source, "Config file unreadable");
    ConfigError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// `TETHER_CONFIG` if set and non-empty, else `~/.tether/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR)
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".tether").join("config.toml"))
}
