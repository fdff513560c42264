//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use pora::config::{DeploymentConfig, env_bool};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub deployment: DeploymentConfig,
    /// In sub-path mode, redirect `/` to the prefix.
    pub redirect_root: bool,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORA_ENV`: `production` or `development`, default from build profile
    /// - `PORA_REDIRECT_ROOT`: boolean, default true
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let deployment = DeploymentConfig::from_env()?;
        let redirect_root = env_bool("PORA_REDIRECT_ROOT").unwrap_or(true);
        Ok(Self { port, deployment, redirect_root })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}
