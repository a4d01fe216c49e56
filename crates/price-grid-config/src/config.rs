// crates/price-grid-config/src/config.rs
// ============================================================================
// Module: Price Grid Configuration
// Description: Configuration loading and validation for Price Grid.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path
//! limits. Missing or invalid configuration fails closed; no defaulting ever
//! papers over an invalid value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "price-grid.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "PRICE_GRID_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default bind address for the HTTP server.
const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
/// Maximum allowed request body size in bytes.
pub(crate) const MAX_BODY_BYTES_LIMIT: usize = 1024 * 1024;
/// Default record path for the file store.
const DEFAULT_STORE_PATH: &str = "data/pricing.json";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Price Grid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceGridConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Matrix store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

impl PriceGridConfig {
    /// Loads configuration from a path, the environment override, or the
    /// default filename.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Audit sink selection.
    #[serde(default)]
    pub audit: AuditMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
            audit: AuditMode::default(),
        }
    }
}

impl ServerConfig {
    /// Validates server settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a setting is out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.trim().is_empty() {
            return Err(ConfigError::Invalid("server.bind must be non-empty".to_string()));
        }
        if self.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(
                "server.bind must be a valid socket address".to_string(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.max_body_bytes must be positive".to_string(),
            ));
        }
        if self.max_body_bytes > MAX_BODY_BYTES_LIMIT {
            return Err(ConfigError::Invalid(
                "server.max_body_bytes exceeds hard limit".to_string(),
            ));
        }
        Ok(())
    }
}

/// Audit sink selection.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditMode {
    /// No audit output.
    #[default]
    Off,
    /// JSON-line audit events on stderr.
    Stderr,
}

/// Matrix store backend selection.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    /// Durable flat-file store (recommended).
    #[default]
    File,
    /// Volatile in-memory store for local demos.
    Memory,
}

/// Matrix store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Store backend type.
    #[serde(default, rename = "type")]
    pub store_type: StoreType,
    /// Record path for the file store.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::default(),
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    /// Validates store settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the record path is invalid for the
    /// selected backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_type == StoreType::Memory {
            return Ok(());
        }
        if self.path.trim().is_empty() {
            return Err(ConfigError::Invalid("store.path must be non-empty".to_string()));
        }
        validate_record_path(Path::new(&self.path))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the default bind address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Returns the default maximum request body size.
const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

/// Returns the default file store record path.
fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved config path against size limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates the record path for the file store.
fn validate_record_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("store.path exceeds max length".to_string()));
    }
    for component in path.components() {
        if matches!(component, std::path::Component::ParentDir) {
            return Err(ConfigError::Invalid(
                "store.path must not contain parent traversal".to_string(),
            ));
        }
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("store.path component too long".to_string()));
        }
    }
    Ok(())
}
