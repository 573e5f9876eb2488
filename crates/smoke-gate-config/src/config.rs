// crates/smoke-gate-config/src/config.rs
// ============================================================================
// Module: Smoke Gate Configuration
// Description: Configuration loading and validation for Smoke Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: smoke-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section carries serde defaults, so an empty file yields the stock
//! deployment layout (web tier on 8000, api tier on 55000). Validation is
//! strict: an out-of-range value fails the load rather than being clamped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use smoke_gate_core::TargetHost;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "smoke-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "SMOKE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default web tier port.
pub(crate) const DEFAULT_WEB_PORT: u16 = 8000;
/// Default api tier port.
pub(crate) const DEFAULT_API_PORT: u16 = 55_000;
/// Default per-request HTTP timeout in milliseconds.
pub(crate) const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
/// Minimum per-request HTTP timeout in milliseconds.
pub(crate) const MIN_HTTP_TIMEOUT_MS: u64 = 100;
/// Maximum per-request HTTP timeout in milliseconds.
pub(crate) const MAX_HTTP_TIMEOUT_MS: u64 = 300_000;
/// Default User-Agent header sent with every request.
pub(crate) const DEFAULT_USER_AGENT: &str = "smoke-gate/0.1";
/// Default readiness probe path.
pub(crate) const DEFAULT_READINESS_PATH: &str = "/health";
/// Default HTTP status treated as ready.
pub(crate) const DEFAULT_READINESS_STATUS: u16 = 200;
/// Default number of readiness attempts before giving up.
pub(crate) const DEFAULT_READINESS_MAX_ATTEMPTS: u32 = 30;
/// Maximum allowed readiness attempts.
pub(crate) const MAX_READINESS_ATTEMPTS: u32 = 1_000;
/// Default delay between readiness attempts in milliseconds.
pub(crate) const DEFAULT_READINESS_RETRY_DELAY_MS: u64 = 1_000;
/// Maximum allowed readiness retry delay in milliseconds.
pub(crate) const MAX_READINESS_RETRY_DELAY_MS: u64 = 60_000;
/// Default analyze endpoint path.
pub(crate) const DEFAULT_ANALYZE_PATH: &str = "/analyze";
/// Default multipart field name for the uploaded image.
pub(crate) const DEFAULT_ANALYZE_FIELD: &str = "image";

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Top-level Smoke Gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmokeGateConfig {
    /// Web tier (frontend) settings.
    #[serde(default = "TierConfig::default_web")]
    pub web: TierConfig,
    /// Api tier (analysis service) settings.
    #[serde(default = "TierConfig::default_api")]
    pub api: TierConfig,
    /// HTTP client settings shared by all checks.
    #[serde(default)]
    pub http: HttpConfig,
    /// Readiness probe settings.
    #[serde(default)]
    pub readiness: ReadinessConfig,
    /// Analyze endpoint settings.
    #[serde(default)]
    pub analyze: AnalyzeConfig,
}

impl Default for SmokeGateConfig {
    fn default() -> Self {
        Self {
            web: TierConfig::default_web(),
            api: TierConfig::default_api(),
            http: HttpConfig::default(),
            readiness: ReadinessConfig::default(),
            analyze: AnalyzeConfig::default(),
        }
    }
}

impl SmokeGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then the `SMOKE_GATE_CONFIG`
    /// environment variable, then `smoke-gate.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
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
        self.web.validate("web")?;
        self.api.validate("api")?;
        self.http.validate()?;
        self.readiness.validate()?;
        self.analyze.validate()?;
        Ok(())
    }
}

/// Settings for one deployment tier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TierConfig {
    /// URL scheme used to reach the tier.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// TCP port the tier listens on.
    pub port: u16,
    /// Optional out-of-band process check command (argv form).
    #[serde(default)]
    pub process_check: Option<Vec<String>>,
}

impl TierConfig {
    /// Returns the stock web tier settings.
    #[must_use]
    pub fn default_web() -> Self {
        Self {
            scheme: default_scheme(),
            port: DEFAULT_WEB_PORT,
            process_check: None,
        }
    }

    /// Returns the stock api tier settings.
    #[must_use]
    pub fn default_api() -> Self {
        Self {
            scheme: default_scheme(),
            port: DEFAULT_API_PORT,
            process_check: None,
        }
    }

    /// Derives the base URL for this tier against a target host.
    #[must_use]
    pub fn base_url(&self, target: &TargetHost) -> String {
        format!("{}://{}:{}", self.scheme, target.as_str(), self.port)
    }

    /// Validates tier settings.
    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ConfigError::Invalid(format!(
                "{section}.scheme must be http or https"
            )));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(format!("{section}.port must be non-zero")));
        }
        if let Some(command) = &self.process_check {
            if command.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{section}.process_check must not be an empty command"
                )));
            }
            if command.iter().any(|arg| arg.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "{section}.process_check arguments must be non-empty"
                )));
            }
        }
        Ok(())
    }
}

/// HTTP client settings shared by all checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    /// Validates HTTP settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < MIN_HTTP_TIMEOUT_MS || self.timeout_ms > MAX_HTTP_TIMEOUT_MS {
            return Err(ConfigError::Invalid("http.timeout_ms out of range".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("http.user_agent must be non-empty".to_string()));
        }
        Ok(())
    }
}

/// Readiness probe settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Path probed on the api tier.
    pub path: String,
    /// HTTP status treated as ready.
    pub expected_status: u16,
    /// Number of attempts before giving up.
    pub max_attempts: u32,
    /// Delay between attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_READINESS_PATH.to_string(),
            expected_status: DEFAULT_READINESS_STATUS,
            max_attempts: DEFAULT_READINESS_MAX_ATTEMPTS,
            retry_delay_ms: DEFAULT_READINESS_RETRY_DELAY_MS,
        }
    }
}

impl ReadinessConfig {
    /// Validates readiness settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::Invalid(
                "readiness.path must start with '/'".to_string(),
            ));
        }
        if self.expected_status < 100 || self.expected_status > 599 {
            return Err(ConfigError::Invalid(
                "readiness.expected_status must be a valid http status".to_string(),
            ));
        }
        if self.max_attempts == 0 || self.max_attempts > MAX_READINESS_ATTEMPTS {
            return Err(ConfigError::Invalid(
                "readiness.max_attempts out of range".to_string(),
            ));
        }
        if self.retry_delay_ms > MAX_READINESS_RETRY_DELAY_MS {
            return Err(ConfigError::Invalid(
                "readiness.retry_delay_ms out of range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Analyze endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Upload endpoint path on the api tier.
    pub path: String,
    /// Multipart field name carrying the image.
    pub field_name: String,
    /// Optional override for the built-in sample image.
    pub sample_image: Option<PathBuf>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_ANALYZE_PATH.to_string(),
            field_name: DEFAULT_ANALYZE_FIELD.to_string(),
            sample_image: None,
        }
    }
}

impl AnalyzeConfig {
    /// Validates analyze settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::Invalid("analyze.path must start with '/'".to_string()));
        }
        if self.field_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "analyze.field_name must be non-empty".to_string(),
            ));
        }
        if let Some(sample) = &self.sample_image {
            validate_path_string("analyze.sample_image", &sample.to_string_lossy())?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or validating configuration.
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

/// Returns the default tier scheme.
fn default_scheme() -> String {
    "http".to_string()
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

/// Validates the resolved path against security limits.
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

/// Validates a configured path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
