//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Result limit prefilled into the form.
pub const DEFAULT_LIMIT: u32 = 20;
/// Language code prefilled into the form.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BIZLENS_CONFIG";
/// Environment variable overriding the backend base URL.
pub const API_URL_ENV_VAR: &str = "BIZLENS_API_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/bizlens/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Backend base URL, e.g. `http://127.0.0.1:5000`.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Result limit used when the limit field is empty or invalid.
    #[serde(default)]
    pub default_limit: Option<u32>,

    /// Language code prefilled in the form.
    #[serde(default)]
    pub default_language: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Backend base URL, without a trailing path.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Always at least 1.
    pub default_limit: u32,
    /// Language code prefilled into the form.
    pub default_language: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_limit: DEFAULT_LIMIT,
            default_language: DEFAULT_LANGUAGE.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// From `--api-url`.
    pub api_base_url: Option<String>,
    /// From `--timeout`.
    pub request_timeout_secs: Option<u64>,
    /// From `--limit`.
    pub default_limit: Option<u32>,
    /// From `--language`.
    pub default_language: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bizlens/bizlens.log` on Linux, the platform
/// equivalent elsewhere, and `bizlens.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bizlens").join("bizlens.log")
    } else {
        PathBuf::from("bizlens.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath("empty path".to_string()));
    }

    // Missing file is not an error
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `None` if the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bizlens").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BIZLENS_CONFIG` environment variable
/// 3. Default path `~/.config/bizlens/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults.
///
/// A zero `default_limit` in the file is ignored.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        default_limit: config
            .default_limit
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.default_limit),
        default_language: config.default_language.unwrap_or(defaults.default_language),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// Checks `BIZLENS_API_URL`; an empty value is ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        if !url.trim().is_empty() {
            config.api_base_url = url;
        }
    }

    config
}

/// Apply CLI argument overrides, the highest precedence source.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }

    if let Some(timeout) = cli.request_timeout_secs {
        config.request_timeout_secs = timeout;
    }

    if let Some(limit) = cli.default_limit.filter(|limit| *limit > 0) {
        config.default_limit = limit;
    }

    if let Some(language) = cli.default_language {
        config.default_language = language;
    }

    config
}

/// Run the whole chain: file lookup, merge, env, CLI.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file));
    Ok(apply_cli_overrides(config, cli))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
