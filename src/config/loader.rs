//! Resolving settings from the config file, environment and command line.
//!
//! Each layer only replaces the values it sets:
//! built-in defaults, then `config.toml`, then `LOGSCROLL_*` variables, then
//! flags given on the command line.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names an explicit config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LOGSCROLL_CONFIG";
pub const SPREAD_LIMIT_ENV: &str = "LOGSCROLL_SPREAD_LIMIT";
pub const COLORIZE_ENV: &str = "LOGSCROLL_COLORIZE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `LOGSCROLL_*` variable is set to something unusable.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Contents of `config.toml`. Absent keys leave the default in place.
///
/// ```toml
/// spread_limit = 600
/// colorize = true
/// follow = false
/// log_file_path = "/tmp/logscroll.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub spread_limit: Option<usize>,
    pub colorize: Option<bool>,
    pub follow: Option<bool>,
    pub log_file_path: Option<PathBuf>,
}

/// Values taken from command-line flags; `None` means the flag was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub spread_limit: Option<usize>,
    pub colorize: Option<bool>,
    pub follow: Option<bool>,
}

/// Settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Window size in lines. `None` sizes the window from the terminal.
    pub spread_limit: Option<usize>,
    pub colorize: bool,
    pub follow: bool,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            spread_limit: None,
            colorize: false,
            follow: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Defaults with any values present in `file` laid over them.
    pub fn from_file(file: Option<ConfigFile>) -> Self {
        let mut config = Self::default();
        let Some(file) = file else {
            return config;
        };

        if file.spread_limit.is_some() {
            config.spread_limit = file.spread_limit;
        }
        if let Some(colorize) = file.colorize {
            config.colorize = colorize;
        }
        if let Some(follow) = file.follow {
            config.follow = follow;
        }
        if let Some(path) = file.log_file_path {
            config.log_file_path = path;
        }
        config
    }

    /// Apply `LOGSCROLL_SPREAD_LIMIT` (a positive integer) and
    /// `LOGSCROLL_COLORIZE` (`1`, `0`, `true` or `false`).
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidEnvValue` when either is set to anything else.
    pub fn with_env(mut self) -> Result<Self, ConfigError> {
        if let Some(limit) = env_value(SPREAD_LIMIT_ENV, |raw| {
            raw.parse::<usize>().ok().filter(|&n| n > 0)
        })? {
            self.spread_limit = Some(limit);
        }

        if let Some(colorize) = env_value(COLORIZE_ENV, |raw| match raw {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        })? {
            self.colorize = colorize;
        }

        Ok(self)
    }

    pub fn with_cli(mut self, cli: CliOverrides) -> Self {
        self.spread_limit = cli.spread_limit.or(self.spread_limit);
        self.colorize = cli.colorize.unwrap_or(self.colorize);
        self.follow = cli.follow.unwrap_or(self.follow);
        self
    }
}

/// Read `var` and convert it with `parse`, which sees the trimmed value.
fn env_value<T>(
    var: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };
    match parse(value.trim()) {
        Some(parsed) => Ok(Some(parsed)),
        None => Err(ConfigError::InvalidEnvValue { var, value }),
    }
}

/// `logscroll/logscroll.log` under the platform state directory, or in the
/// working directory when there is none.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("logscroll"))
        .unwrap_or_default()
        .join("logscroll.log")
}

/// `logscroll/config.toml` under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("logscroll").join("config.toml"))
}

/// Which config file to read: `explicit` (from `--config`), else
/// `$LOGSCROLL_CONFIG`, else [`default_config_path`].
pub fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Parse the config file at `path`. A missing file is `Ok(None)`.
///
/// # Errors
///
/// `Read` or `Parse` when the file exists but is unusable.
pub fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Run the whole chain: defaults, config file, environment, `cli`.
///
/// # Errors
///
/// Anything [`read_config_file`] or [`ResolvedConfig::with_env`] reports.
pub fn resolve(explicit: Option<PathBuf>, cli: CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let file = match config_path(explicit) {
        Some(path) => read_config_file(&path)?,
        None => None,
    };
    Ok(ResolvedConfig::from_file(file).with_env()?.with_cli(cli))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
