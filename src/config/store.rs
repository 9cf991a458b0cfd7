//! Loading and saving the config file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::paths::{ensure_config_dir, global_config_path};
use super::Config;
use crate::error::ConfigError;

/// The config file and its loaded contents.
///
/// A missing file is not an error: the store starts from
/// [`Config::default`] and reports [`is_onboarded`](Self::is_onboarded) as
/// false until the first save.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Open the global config file.
    pub fn open_global() -> Result<Self, ConfigError> {
        Self::open(global_config_path()?)
    }

    /// Open the config file at `path`, creating its directory if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        ensure_config_dir(&path)?;
        let config = load(&path)?;
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True once a config file has been written.
    pub fn is_onboarded(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        ensure_config_dir(&self.path)?;
        let yaml = serde_yaml::to_string(&self.config).map_err(ConfigError::Serialize)?;
        fs::write(&self.path, yaml).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "Saved configuration");
        Ok(())
    }

    /// Replace the configuration and persist it.
    pub fn update(&mut self, config: Config) -> Result<(), ConfigError> {
        self.config = config;
        self.save()
    }
}

fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
