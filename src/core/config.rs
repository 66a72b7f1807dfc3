//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cinebusca/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::GatewayConfig;
use crate::catalog::gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::search::{DEFAULT_DEBOUNCE, DEFAULT_INITIAL_QUERY, SearchSettings};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CinebuscaConfig {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub initial_query: Option<String>,
    pub debounce_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub gateway: GatewayConfig,
    pub search: SearchSettings,
}

/// Values passed on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub api_key: Option<&'a str>,
    pub query: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingApiKey => write!(
                f,
                "OMDb API key not set (use --api-key, OMDB_API_KEY, or [omdb] api_key in the config file)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cinebusca/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cinebusca").join("config.toml"))
}

/// Load config from `~/.cinebusca/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CinebuscaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CinebuscaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CinebuscaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CinebuscaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: CinebuscaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: base_url={:?} timeout_secs={:?} search={:?}",
        config.omdb.base_url, config.omdb.timeout_secs, config.search
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Cinebusca Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [omdb]
# api_key = "your-key"               # Or set OMDB_API_KEY env var
# base_url = "https://www.omdbapi.com/"
# timeout_secs = 10

# [search]
# initial_query = "marvel"
# debounce_ms = 500
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &CinebuscaConfig,
    cli: &CliOverrides<'_>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &CinebuscaConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // API key: CLI → env → config
    let api_key = cli
        .api_key
        .map(|s| s.to_string())
        .or_else(|| env("OMDB_API_KEY"))
        .or_else(|| config.omdb.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    // Base URL: env → config → default
    let base_url = env("OMDB_BASE_URL")
        .or_else(|| config.omdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = config
        .omdb
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    // Seed query: CLI → config → default. An empty seed is allowed.
    let initial_query = cli
        .query
        .map(|s| s.to_string())
        .or_else(|| config.search.initial_query.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_QUERY.to_string());

    let debounce = config
        .search
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DEBOUNCE);

    Ok(ResolvedConfig {
        gateway: GatewayConfig {
            base_url,
            api_key,
            timeout,
        },
        search: SearchSettings {
            debounce,
            initial_query,
        },
    })
}
