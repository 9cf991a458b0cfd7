//! Location of the global config file

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Overrides the config file location when set.
pub const CONFIG_ENV: &str = "SWEEP_CONFIG";

/// Directory under the home directory holding the config file.
pub const CONFIG_DIR: &str = ".sweep";

pub const CONFIG_FILE: &str = "config.yaml";

/// `$SWEEP_CONFIG` if set, otherwise `~/.sweep/config.yaml`.
pub fn global_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(config_path_in(&home_dir))
}

/// Config file location under a given home directory.
pub fn config_path_in(home_dir: &Path) -> PathBuf {
    home_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Create the directory that will hold `config_path`.
pub fn ensure_config_dir(config_path: &Path) -> Result<(), ConfigError> {
    let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
