//! Server configuration loading.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables, then command-line flags (applied by the CLI).
//!
//! ## Environment Variables
//!
//! - `FILEWRIGHT_MAX_DEPTH` - Default search depth bound (default: 3)
//! - `FILEWRIGHT_MAX_RESULTS` - Default search result cap (default: 50)
//! - `FILEWRIGHT_BACKUP_SUFFIX` - Suffix appended to backup copies (default: `.bak`)
//! - `FILEWRIGHT_TRANSPORT` - `stdio` or `http` (default: `stdio`)
//! - `FILEWRIGHT_BIND` - HTTP listen address (default: `127.0.0.1:8000`)
//!
//! ## Example file
//!
//! ```toml
//! [search]
//! max_depth = 5
//! max_results = 100
//!
//! [edit]
//! backup_suffix = ".orig"
//!
//! [server]
//! transport = "http"
//! bind = "0.0.0.0:8000"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Parse(String),

    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilewrightConfig {
    pub search: SearchDefaults,
    pub edit: EditSettings,
    pub server: ServerSettings,
}

/// Limits applied to `find_files` when the caller does not supply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub max_depth: usize,
    pub max_results: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_results: 50,
        }
    }
}

/// Settings shared by every operation that writes a backup copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditSettings {
    pub backup_suffix: String,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            backup_suffix: ".bak".to_string(),
        }
    }
}

/// MCP transport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http => write!(f, "http"),
        }
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            other => Err(format!("unknown transport '{}', expected stdio or http", other)),
        }
    }
}

/// Server identity and transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub name: String,
    pub transport: Transport,
    pub bind: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            name: "filewright".to_string(),
            transport: Transport::Stdio,
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

impl FilewrightConfig {
    /// Load defaults, an optional TOML file, then environment overrides,
    /// and validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_env()?;
        config.validate()?;

        tracing::debug!(
            file = ?path,
            max_depth = config.search.max_depth,
            max_results = config.search.max_results,
            transport = %config.server.transport,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::load_from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn load_from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `FILEWRIGHT_*` environment variable overrides.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(depth) = get_env_parsed::<usize>("FILEWRIGHT_MAX_DEPTH")? {
            self.search.max_depth = depth;
        }
        if let Some(results) = get_env_parsed::<usize>("FILEWRIGHT_MAX_RESULTS")? {
            self.search.max_results = results;
        }
        if let Some(suffix) = get_env_string("FILEWRIGHT_BACKUP_SUFFIX") {
            self.edit.backup_suffix = suffix;
        }
        if let Some(transport) = get_env_parsed::<Transport>("FILEWRIGHT_TRANSPORT")? {
            self.server.transport = transport;
        }
        if let Some(bind) = get_env_parsed::<SocketAddr>("FILEWRIGHT_BIND")? {
            self.server.bind = bind;
        }
        Ok(self)
    }

    /// Validate configuration, failing fast on values no operation can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "search.max_results must be > 0".to_string(),
            ));
        }

        let suffix = &self.edit.backup_suffix;
        if suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "edit.backup_suffix cannot be empty (backup would overwrite the original)"
                    .to_string(),
            ));
        }
        if suffix.contains('/') || suffix.contains(std::path::MAIN_SEPARATOR) {
            return Err(ConfigError::ValidationError(format!(
                "edit.backup_suffix '{}' must not contain a path separator",
                suffix
            )));
        }

        if self.server.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn get_env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match get_env_string(key) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("'{}': {}", value, e),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn set_env(key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    fn clear_env() {
        for key in [
            "FILEWRIGHT_MAX_DEPTH",
            "FILEWRIGHT_MAX_RESULTS",
            "FILEWRIGHT_BACKUP_SUFFIX",
            "FILEWRIGHT_TRANSPORT",
            "FILEWRIGHT_BIND",
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = FilewrightConfig::default();
        assert_eq!(config.search.max_depth, 3);
        assert_eq!(config.search.max_results, 50);
        assert_eq!(config.edit.backup_suffix, ".bak");
        assert_eq!(config.server.transport, Transport::Stdio);
        assert_eq!(config.server.bind.port(), 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FilewrightConfig::load_from_toml(
            r#"
            [search]
            max_depth = 7

            [server]
            transport = "http"
            "#,
        )
        .unwrap();

        assert_eq!(config.search.max_depth, 7);
        assert_eq!(config.search.max_results, 50);
        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.edit.backup_suffix, ".bak");
    }

    #[test]
    fn test_invalid_toml() {
        let err = FilewrightConfig::load_from_toml("[search\nmax_depth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[edit]\nbackup_suffix = \".orig\"").unwrap();

        let config = FilewrightConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.edit.backup_suffix, ".orig");

        let err = FilewrightConfig::load_from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = FilewrightConfig::default();
        config.search.max_results = 0;
        assert!(config.validate().is_err());

        let mut config = FilewrightConfig::default();
        config.edit.backup_suffix = String::new();
        assert!(config.validate().is_err());

        let mut config = FilewrightConfig::default();
        config.edit.backup_suffix = "/tmp/evil".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        set_env("FILEWRIGHT_MAX_DEPTH", "9");
        set_env("FILEWRIGHT_TRANSPORT", "HTTP");
        set_env("FILEWRIGHT_BIND", "0.0.0.0:9100");

        let config = FilewrightConfig::load(None).unwrap();
        assert_eq!(config.search.max_depth, 9);
        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.server.bind.port(), 9100);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_invalid_value() {
        clear_env();
        set_env("FILEWRIGHT_MAX_RESULTS", "lots");

        let err = FilewrightConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref key, .. } if key == "FILEWRIGHT_MAX_RESULTS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_zero_results_fails_validation() {
        clear_env();
        set_env("FILEWRIGHT_MAX_RESULTS", "0");

        let err = FilewrightConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        clear_env();
    }
}
