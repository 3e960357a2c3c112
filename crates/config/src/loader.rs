//! Layered configuration.
//!
//! Settings are merged from three layers, highest first:
//!
//! | Layer | Source |
//! |-------|--------|
//! | overrides | command-line flags and environment variables |
//! | file | `--config FILE`, else the first `.aws-ps-client.toml` found |
//! | defaults | region `us-west-2`, format `text` |
//!
//! After merging, the access key, secret and region go through
//! [`read_indirect`] so any of them may name a file holding the value.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::format::OutputFormat;
use crate::indirect::read_indirect;

/// Config file name searched for in the home and working directories.
pub const CONFIG_FILE_NAME: &str = ".aws-ps-client.toml";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-west-2";

/// One layer of optional settings.
///
/// Deserialized from the config file; also built from flags by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// IAM access key, or path to a file holding it
    pub aws_access_key: Option<String>,
    /// IAM access secret, or path to a file holding it
    pub aws_access_secret: Option<String>,
    /// Region, or path to a file holding it
    pub aws_region: Option<String>,
    /// `bash`, `json` or `text`
    pub format: Option<String>,
}

impl Settings {
    /// Fill every unset field of `self` from `lower`.
    pub fn or(self, lower: Settings) -> Settings {
        Settings {
            aws_access_key: self.aws_access_key.or(lower.aws_access_key),
            aws_access_secret: self.aws_access_secret.or(lower.aws_access_secret),
            aws_region: self.aws_region.or(lower.aws_region),
            format: self.format.or(lower.format),
        }
    }

    /// Parse settings from TOML text.
    pub fn from_toml(raw: &str, path: &Path) -> Result<Settings> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// IAM access key
    pub aws_access_key: String,
    /// IAM access secret
    pub aws_access_secret: String,
    /// AWS region
    pub aws_region: String,
    /// Output format
    pub format: OutputFormat,
    /// Config file that contributed settings, if any
    pub source: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("aws_access_key", &self.aws_access_key)
            .field("aws_access_secret", &"<redacted>")
            .field("aws_region", &self.aws_region)
            .field("format", &self.format)
            .field("source", &self.source)
            .finish()
    }
}

impl Config {
    /// Fail unless both credentials are present.
    pub fn require_credentials(&self) -> Result<()> {
        if self.aws_access_key.is_empty() {
            return Err(ConfigError::Missing("AWS access key"));
        }
        if self.aws_access_secret.is_empty() {
            return Err(ConfigError::Missing("AWS access secret"));
        }
        Ok(())
    }
}

/// Builds a [`Config`] from overrides, a config file and defaults.
///
/// ```ignore
/// let config = ConfigLoader::new()
///     .config_file(Some("./ci.toml"))
///     .overrides(settings_from_flags)
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
    overrides: Settings,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader searching the home directory, then the working directory.
    pub fn new() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(home) = home_dir() {
            search_dirs.push(home);
        }
        search_dirs.push(PathBuf::from("."));
        Self {
            config_file: None,
            search_dirs,
            overrides: Settings::default(),
        }
    }

    /// Use exactly this file instead of searching. It must be readable.
    pub fn config_file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.config_file = path.map(Into::into);
        self
    }

    /// Replace the directories searched for [`CONFIG_FILE_NAME`].
    pub fn search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    /// Settings that win over the config file.
    pub fn overrides(mut self, overrides: Settings) -> Self {
        self.overrides = overrides;
        self
    }

    /// Merge all layers into a [`Config`].
    pub fn load(self) -> Result<Config> {
        let (file_settings, source) = match self.locate() {
            Some((path, explicit)) => match std::fs::read_to_string(&path) {
                Ok(raw) => {
                    debug!("reading config file {}", path.display());
                    (Settings::from_toml(&raw, &path)?, Some(path))
                }
                Err(source) if explicit => return Err(ConfigError::Read { path, source }),
                Err(e) => {
                    warn!("skipping config file {}: {}", path.display(), e);
                    (Settings::default(), None)
                }
            },
            None => {
                debug!("no config file found");
                (Settings::default(), None)
            }
        };

        let merged = self.overrides.or(file_settings);
        let format = match merged.format.as_deref() {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Config {
            aws_access_key: read_indirect(
                "aws-access-key",
                merged.aws_access_key.unwrap_or_default(),
            ),
            aws_access_secret: read_indirect(
                "aws-access-secret",
                merged.aws_access_secret.unwrap_or_default(),
            ),
            aws_region: read_indirect(
                "aws-region",
                merged.aws_region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            ),
            format,
            source,
        })
    }

    /// The file to read and whether it was named explicitly.
    fn locate(&self) -> Option<(PathBuf, bool)> {
        if let Some(path) = &self.config_file {
            return Some((path.clone(), true));
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
            .map(|path| (path, false))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
