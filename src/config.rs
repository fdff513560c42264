//! Deployment configuration shared by the server and browser builds.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sub-path literal and backend origin are fixed at build time so the
//! WASM bundle and the SSR binary see identical values. Only the build mode
//! can be overridden at runtime, and only on the server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Sub-path the production deployment is served under.
pub const DEFAULT_BASE_PATH: &str = "/pora";

/// Build-time override for [`DEFAULT_BASE_PATH`].
pub const BASE_PATH: &str = match option_env!("PORA_BASE_PATH") {
    Some(path) => path,
    None => DEFAULT_BASE_PATH,
};

/// Origin of the identity and messaging backend. Empty means same-origin.
pub const BACKEND_URL: &str = match option_env!("PORA_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Errors produced while reading deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORA_ENV` held something other than a known mode.
    #[error("unknown PORA_ENV: {0}")]
    UnknownMode(String),

    /// The sub-path must look like `/segment` with no trailing slash.
    #[error("invalid base path '{0}': expected a leading '/' and no trailing '/'")]
    InvalidBasePath(String),
}

/// Whether this is a production build/deploy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    /// Mode implied by the compiler profile.
    #[must_use]
    pub const fn from_profile() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Deployment facts consumed by [`crate::util::asset_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub mode: BuildMode,
    pub base_path: String,
}

impl DeploymentConfig {
    /// Configuration baked into this build. Used by the browser bundle, which
    /// has no process environment.
    #[must_use]
    pub fn from_build() -> Self {
        Self { mode: BuildMode::from_profile(), base_path: BASE_PATH.to_owned() }
    }

    /// Server configuration: build values plus an optional `PORA_ENV` override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORA_ENV` is not `production`/`development`
    /// or the build-time base path is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = parse_mode(std::env::var("PORA_ENV").ok().as_deref())?;
        let base_path = validate_base_path(BASE_PATH)?;
        Ok(Self { mode, base_path })
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

pub(crate) fn parse_mode(raw: Option<&str>) -> Result<BuildMode, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(BuildMode::from_profile());
    };
    match raw.to_ascii_lowercase().as_str() {
        "production" | "prod" => Ok(BuildMode::Production),
        "development" | "dev" => Ok(BuildMode::Development),
        _ => Err(ConfigError::UnknownMode(raw.to_owned())),
    }
}

pub(crate) fn validate_base_path(raw: &str) -> Result<String, ConfigError> {
    if raw.len() < 2 || !raw.starts_with('/') || raw.ends_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_owned()));
    }
    Ok(raw.to_owned())
}

/// Parse a boolean environment flag (`1/true/yes/on`, `0/false/no/off`).
///
/// Returns `None` when unset or unrecognized.
#[must_use]
pub fn env_bool(key: &str) -> Option<bool> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
