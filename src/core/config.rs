//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.intake/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::Screen;
use crate::core::persist;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Screen to open on startup: "form", "admin" or "builder".
    pub default_screen: Option<String>,
    /// Where the JSON snapshots live. Defaults to `~/.intake/`.
    pub data_dir: Option<String>,
    /// Where CSV exports are written. Defaults to the working directory.
    pub export_dir: Option<String>,
    /// Simulated submit delay in milliseconds.
    pub submit_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 800;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub screen: Screen,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub submit_delay_ms: u64,
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

/// Returns the path to `~/.intake/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".intake").join("config.toml"))
}

/// Load config from `~/.intake/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `IntakeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<IntakeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(IntakeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(IntakeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: IntakeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Intake Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_screen = "form"          # "form", "admin" or "builder"
# data_dir = "/home/me/.intake"    # where submissions.json / fields.json live
# export_dir = "."                 # where CSV exports are written
# submit_delay_ms = 800            # simulated submit delay
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_screen` and `cli_data_dir` come from CLI flags (None = not specified).
pub fn resolve(
    config: &IntakeConfig,
    cli_screen: Option<Screen>,
    cli_data_dir: Option<&str>,
) -> ResolvedConfig {
    // Screen: CLI → env → config → default
    let screen = cli_screen
        .or_else(|| std::env::var("INTAKE_SCREEN").ok().and_then(|s| parse_screen(&s)))
        .or_else(|| {
            config
                .general
                .default_screen
                .as_deref()
                .and_then(parse_screen)
        })
        .unwrap_or_default();

    // Data dir: CLI → env → config → ~/.intake
    let data_dir = cli_data_dir
        .map(PathBuf::from)
        .or_else(|| std::env::var("INTAKE_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_ref().map(PathBuf::from))
        .or_else(|| persist::data_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Export dir: config → working directory
    let export_dir = config
        .general
        .export_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    ResolvedConfig {
        screen,
        data_dir,
        export_dir,
        submit_delay_ms: config
            .general
            .submit_delay_ms
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
    }
}

fn parse_screen(s: &str) -> Option<Screen> {
    match s.to_lowercase().as_str() {
        "form" => Some(Screen::Form),
        "admin" => Some(Screen::Admin),
        "builder" => Some(Screen::Builder),
        _ => None,
    }
}
