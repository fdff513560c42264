//! Deployment-relative asset URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same static pages are served either from the domain root or from the
//! fixed sub-path in [`crate::config::BASE_PATH`]. The prefix can't be baked
//! into the WASM bundle, so each side derives it from what it can observe:
//! the server from its build mode, the browser from its own location path.
//!
//! INVARIANT
//! =========
//! For one deployment both derivations must yield the same prefix, otherwise
//! hydrated icon/manifest URLs differ from the server-rendered markup. This
//! holds as long as production builds are the ones served under the sub-path.
//! A disagreement is a deployment defect and is not corrected at runtime.

#[cfg(test)]
#[path = "asset_path_test.rs"]
mod asset_path_test;

use std::fmt;

use leptos::prelude::*;

use crate::config::DeploymentConfig;

/// Errors produced when validating an asset path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetPathError {
    #[error("asset path must be root-relative (start with '/'): {0:?}")]
    MissingLeadingSlash(String),
}

/// A root-relative asset path such as `/icon-512x512.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPath(std::borrow::Cow<'static, str>);

impl AssetPath {
    /// Wrap a literal path. A literal without a leading `/` fails const
    /// evaluation when bound to a `const`, and panics otherwise.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        assert!(!path.is_empty() && path.as_bytes()[0] == b'/', "asset path must start with '/'");
        Self(std::borrow::Cow::Borrowed(path))
    }

    /// Validate a runtime path.
    ///
    /// # Errors
    ///
    /// Returns [`AssetPathError::MissingLeadingSlash`] if `path` is not
    /// root-relative.
    pub fn parse(path: &str) -> Result<Self, AssetPathError> {
        if path.starts_with('/') {
            Ok(Self(std::borrow::Cow::Owned(path.to_owned())))
        } else {
            Err(AssetPathError::MissingLeadingSlash(path.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the resolver is being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationContext {
    /// Server-side rendering or static generation.
    Server,
    /// Browser after load; carries `location.pathname`.
    Client { location_path: String },
}

impl EvaluationContext {
    /// Context for the current build target: the browser location under
    /// `hydrate`, the server otherwise.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let location_path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned());
            Self::Client { location_path }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Server
        }
    }
}

/// Resolved deployment facts for one evaluation context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentContext {
    pub is_subpath_deployment: bool,
    pub prefix: String,
}

impl DeploymentContext {
    /// Derive the prefix from the evaluation context.
    #[must_use]
    pub fn detect(config: &DeploymentConfig, context: &EvaluationContext) -> Self {
        let is_subpath_deployment = match context {
            EvaluationContext::Server => config.mode.is_production(),
            EvaluationContext::Client { location_path } => is_under(location_path, &config.base_path),
        };
        let prefix = if is_subpath_deployment { config.base_path.clone() } else { String::new() };
        Self { is_subpath_deployment, prefix }
    }

    /// `prefix + path`, with no normalization or encoding.
    #[must_use]
    pub fn resolve(&self, path: &AssetPath) -> String {
        let mut url = String::with_capacity(self.prefix.len() + path.as_str().len());
        url.push_str(&self.prefix);
        url.push_str(path.as_str());
        url
    }
}

/// Resolve `path` against the [`DeploymentContext`] provided by `app::App`.
pub fn use_asset(path: &AssetPath) -> String {
    expect_context::<DeploymentContext>().resolve(path)
}

/// Resolve `path` for the given deployment and evaluation context.
#[must_use]
pub fn resolve(path: &AssetPath, context: &EvaluationContext, config: &DeploymentConfig) -> String {
    DeploymentContext::detect(config, context).resolve(path)
}

/// Segment-aware prefix match: `/pora` and `/pora/x` are under `/pora`,
/// `/porazzo` is not.
fn is_under(location_path: &str, base_path: &str) -> bool {
    match location_path.strip_prefix(base_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
