//! TOML configuration with environment overrides.
//!
//! Lookup order: `$HAVEN_CONFIG`, then `$HOME/.config/haven/config.toml`. A
//! missing file is not an error and yields defaults. `HAVEN_THEME`,
//! `HAVEN_START_TAB`, `HAVEN_START_PAGE`, `HAVEN_LOG_LEVEL` and
//! `HAVEN_LOG_FILE` win over file values.

use std::path::{Path, PathBuf};

use haven_core::navigation::{HomePage, Tab};
use haven_core::ParseError;
use haven_ftui_adapter::style::ThemeKind;
use serde::Deserialize;
use thiserror::Error;

use crate::logging::{LogFormat, LogLevel, LogSink, LoggingConfig};

pub const ENV_CONFIG_PATH: &str = "HAVEN_CONFIG";
pub const ENV_THEME: &str = "HAVEN_THEME";
pub const ENV_START_TAB: &str = "HAVEN_START_TAB";
pub const ENV_START_PAGE: &str = "HAVEN_START_PAGE";
pub const ENV_LOG_LEVEL: &str = "HAVEN_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "HAVEN_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "/tmp/haven-tui.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
    #[error("{var}: {source}")]
    Navigation {
        var: &'static str,
        #[source]
        source: ParseError,
    },
}

/// Profile shown in the home header, settings and safety location card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub name: String,
    pub member_since: String,
    pub location: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Vuyiswa".to_owned(),
            member_since: "2025".to_owned(),
            location: "Johannesburg, Gauteng".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    pub min_password_len: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            min_password_len: haven_core::vault::DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

/// `file` empty disables logging; `-` sends lines to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "console".to_owned(),
            file: DEFAULT_LOG_FILE.to_owned(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: LogLevel::parse(&self.level),
            format: LogFormat::parse(&self.format),
            sink: LogSink::from_path_setting(&self.file),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HavenConfig {
    pub theme: String,
    pub start_tab: Tab,
    /// Home sub-page opened at launch. Ignored unless `start_tab` is home.
    pub start_page: HomePage,
    pub profile: ProfileConfig,
    pub vault: VaultConfig,
    pub log: LogConfig,
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Dark.as_str().to_owned(),
            start_tab: Tab::Home,
            start_page: HomePage::Home,
            profile: ProfileConfig::default(),
            vault: VaultConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Defaults => "defaults".to_owned(),
        }
    }
}

impl HavenConfig {
    /// Parse TOML text and validate it.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields `None`.
    pub fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Resolve, read and override. `lookup` reads environment variables.
    pub fn load(
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let (mut config, source) = match resolve_path(lookup) {
            Some(path) => match Self::load_file(&path)? {
                Some(config) => (config, ConfigSource::File(path)),
                None => (Self::default(), ConfigSource::Defaults),
            },
            None => (Self::default(), ConfigSource::Defaults),
        };
        config.apply_env_overrides(lookup)?;
        Ok((config, source))
    }

    pub fn apply_env_overrides(
        &mut self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(theme) = non_empty(lookup(ENV_THEME)) {
            self.theme = theme;
        }
        if let Some(tab) = non_empty(lookup(ENV_START_TAB)) {
            self.start_tab = tab.parse().map_err(|source| ConfigError::Navigation {
                var: ENV_START_TAB,
                source,
            })?;
        }
        if let Some(page) = non_empty(lookup(ENV_START_PAGE)) {
            self.start_page = page.parse().map_err(|source| ConfigError::Navigation {
                var: ENV_START_PAGE,
                source,
            })?;
        }
        if let Some(level) = non_empty(lookup(ENV_LOG_LEVEL)) {
            self.log.level = level;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.log.file = file;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme_kind()?;
        if self.vault.min_password_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "vault.min_password_len",
                value: "0".to_owned(),
            });
        }
        Ok(())
    }

    pub fn theme_kind(&self) -> Result<ThemeKind, ConfigError> {
        ThemeKind::from_name(&self.theme).ok_or_else(|| ConfigError::InvalidValue {
            field: "theme",
            value: self.theme.clone(),
        })
    }
}

/// `$HAVEN_CONFIG`, else `$HOME/.config/haven/config.toml`.
#[must_use]
pub fn resolve_path(lookup: &dyn Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = non_empty(lookup(ENV_CONFIG_PATH)) {
        return Some(PathBuf::from(path));
    }
    non_empty(lookup("HOME")).map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("haven")
            .join("config.toml")
    })
}

/// Process environment lookup used by the binary.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
