//! Layered configuration for swimr.
//!
//! Values are merged, lowest priority first, from:
//!
//! 1. built-in defaults,
//! 2. a config file (the path in `SWIMR_CONFIG`, or `config.toml` in the
//!    platform config directory when that exists),
//! 3. `SWIMR_`-prefixed environment variables.

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use swimr_extract::CaptureMode;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Prefix shared by every environment variable read as configuration.
pub const ENV_PREFIX: &str = "SWIMR_";
/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SWIMR_CONFIG";
const DEFAULT_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How text chunks inside one `<pre>` block are combined
    pub capture: CaptureMode,
    /// Default log filter directive, used when `RUST_LOG` is unset
    pub log_level: String,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            capture: CaptureMode::default(),
            log_level: "warn".to_string(),
        }
    }
}
impl Config {
    /// Loads configuration, looking for the config file in the usual places.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Some(Path::new(&path))),
            None => Self::load_from(default_path().filter(|path| path.is_file()).as_deref()),
        }
    }

    /// Loads configuration from defaults, the given file (if any) and the
    /// environment. The file must exist when a path is given.
    #[instrument]
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.is_file() {
                exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
            }
            figment = match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
                Some("toml") => figment.merge(Toml::file_exact(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
                Some("json") => figment.merge(Json::file_exact(path)),
                other => exn::bail!(ErrorKind::UnsupportedFormat(other.unwrap_or_default().to_string())),
            };
        }
        let config: Config = match figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"])).extract() {
            Ok(config) => config,
            // Keep figment's message, it names the offending key and its source.
            Err(err) => exn::bail!(ErrorKind::Invalid(err.to_string())),
        };
        config.validate()?;
        tracing::debug!(capture = %config.capture, log_level = %config.log_level, "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// `config.toml` inside the platform-specific config directory.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "swimr").map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
}
