use std::{
    fs,
    path::{Path, PathBuf}
};

pub use worldclock_proto::config::*;

use log::{debug, error, info, warn};
use masterror::AppError;
use shellexpand::full;

const PREFERENCES_DIR: &str = "worldclock";
const PREFERENCES_FILE: &str = "preferences.toml";

/// Failures encountered while locating or loading the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// Shell expansion of a configured path failed.
    Expand { path: String, context: String },
    /// An explicitly requested config file does not exist.
    NotFound { path: PathBuf },
    /// Reading the configuration file from disk failed.
    Read { path: PathBuf, context: String },
    /// Parsing TOML content failed.
    Parse { path: PathBuf, context: String },
    /// Validation detected a logical inconsistency.
    Validation(ConfigValidationError),
    /// No platform directory is available to hold the preference file.
    NoStateDirectory
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expand {
                path,
                context
            } => write!(f, "failed to expand path {path:?}: {context}"),
            Self::NotFound {
                path
            } => write!(f, "config file does not exist: {}", path.display()),
            Self::Read {
                path,
                context
            } => write!(f, "failed to read config at {path:?}: {context}"),
            Self::Parse {
                path,
                context
            } => write!(f, "failed to parse config at {path:?}: {context}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoStateDirectory => {
                write!(f, "no state directory available for the preference file")
            }
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None
        }
    }
}

impl From<ConfigValidationError> for ConfigLoadError {
    fn from(err: ConfigValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ConfigLoadError> for AppError {
    fn from(err: ConfigLoadError) -> Self {
        match err {
            ConfigLoadError::NotFound { .. } => AppError::not_found(err.to_string()),
            _ => AppError::internal(err.to_string())
        }
    }
}

/// Loads the configuration from `path`, or from the default location.
///
/// A missing default file, an unreadable file or an invalid document all
/// fall back to [`Config::default`] after logging. Only an explicitly
/// requested file that does not exist is an error.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigLoadError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path.to_string_lossy())?;

            if !expanded.exists() {
                return Err(ConfigLoadError::NotFound {
                    path: expanded
                });
            }

            Ok((load_or_default(&expanded), expanded))
        }
        None => {
            let expanded = expand_path(DEFAULT_CONFIG_FILE_PATH)?;

            if !expanded.exists() {
                info!("No config file at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            Ok((load_or_default(&expanded), expanded))
        }
    }
}

pub(crate) fn expand_path(path: &str) -> Result<PathBuf, ConfigLoadError> {
    let expanded = full(path).map_err(|err| ConfigLoadError::Expand {
        path:    path.to_owned(),
        context: err.to_string()
    })?;

    Ok(PathBuf::from(expanded.into_owned()))
}

fn load_or_default(path: &Path) -> Config {
    read_config(path).unwrap_or_else(|err| {
        error!("{err}; falling back to default configuration");
        Config::default()
    })
}

/// Reads, parses and validates the configuration file at `path`.
pub fn read_config(path: &Path) -> Result<Config, ConfigLoadError> {
    let content = fs::read_to_string(path).map_err(|err| {
        warn!("Failed to read config file: {err}");
        ConfigLoadError::Read {
            path:    path.to_path_buf(),
            context: err.to_string()
        }
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|err| {
        warn!("Failed to parse config file: {err}");
        ConfigLoadError::Parse {
            path:    path.to_path_buf(),
            context: err.to_string()
        }
    })?;

    config.validate()?;
    info!("Config file loaded successfully");

    Ok(config)
}

/// Location of the persisted preference file for `config`.
///
/// Uses `preferences_path` when set, otherwise the platform state directory
/// (falling back to the local data directory).
pub fn preferences_path(config: &Config) -> Result<PathBuf, ConfigLoadError> {
    if let Some(path) = &config.preferences_path {
        return expand_path(path);
    }

    let base = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigLoadError::NoStateDirectory)?;
    let path = base.join(PREFERENCES_DIR).join(PREFERENCES_FILE);
    debug!("Using default preference file {path:?}");

    Ok(path)
}
