//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.duely/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DuelyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub urgent_window_hours: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_URGENT_WINDOW_HOURS: u32 = 24;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "duely.log";

pub const ENV_URGENT_HOURS: &str = "DUELY_URGENT_HOURS";
pub const ENV_LOG_LEVEL: &str = "DUELY_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub urgent_window_hours: u32,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.duely/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".duely").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.duely/config.toml`.
///
/// A missing default file gets a commented-out template written in its
/// place; a missing explicit file is left alone. Either way the result is
/// `DuelyConfig::default()`. A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<DuelyConfig, ConfigError> {
    let (path, is_default) = match explicit {
        Some(p) => (p.to_path_buf(), false),
        None => match default_config_path() {
            Some(p) => (p, true),
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(DuelyConfig::default());
            }
        },
    };

    if !path.exists() {
        if is_default {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(&path);
        } else {
            warn!("Config file {} does not exist, using defaults", path.display());
        }
        return Ok(DuelyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<DuelyConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Written to the default path on first run. Every line is commented out,
/// so it parses to `DuelyConfig::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Duely Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# urgent_window_hours = 24           # Or DUELY_URGENT_HOURS / --urgent-hours

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_urgent_hours` is from the `--urgent-hours` flag (None = not specified).
pub fn resolve(config: &DuelyConfig, cli_urgent_hours: Option<u32>) -> ResolvedConfig {
    resolve_with_env(config, cli_urgent_hours, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup passed in.
pub fn resolve_with_env(
    config: &DuelyConfig,
    cli_urgent_hours: Option<u32>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Urgent window: CLI → env → config → default
    let urgent_window_hours = cli_urgent_hours
        .or_else(|| env(ENV_URGENT_HOURS).and_then(|v| parse_env_hours(&v)))
        .or(config.general.urgent_window_hours)
        .unwrap_or(DEFAULT_URGENT_WINDOW_HOURS);

    // Log level: env → config → default. An unparseable value falls through.
    let log_level = env(ENV_LOG_LEVEL)
        .and_then(|v| parse_level(&v))
        .or_else(|| config.logging.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        urgent_window_hours,
        log_level,
    }
}

fn parse_env_hours(value: &str) -> Option<u32> {
    match value.trim().parse() {
        Ok(hours) => Some(hours),
        Err(e) => {
            warn!("Ignoring {ENV_URGENT_HOURS}={value:?}: {e}");
            None
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {value:?}");
            None
        }
    }
}
