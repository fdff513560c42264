//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app (SSR, hydrated in the browser) plus its static files.
//! Static URLs are computed with the same asset path resolver the app uses
//! for its `href`/`src` attributes, so what the markup links to is exactly
//! what gets served. Every other path falls through to Leptos, whose router
//! matches below the deployment prefix.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use pora::app::{PKG_DIR, shell};
use pora::components::pwa_head::PUBLIC_ASSETS;
use pora::util::asset_path::{AssetPath, DeploymentContext, EvaluationContext};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application router: static files, health check, Leptos SSR fallback.
pub fn app(options: LeptosOptions, config: &ServerConfig) -> Router {
    let deployment = DeploymentContext::detect(&config.deployment, &EvaluationContext::Server);
    let site_root = PathBuf::from(options.site_root.as_ref());
    tracing::info!(
        subpath = deployment.is_subpath_deployment,
        prefix = %deployment.prefix,
        site_root = %site_root.display(),
        "deployment resolved"
    );

    let ssr = leptos_axum::render_app_to_stream({
        let deployment = deployment.clone();
        move || shell(options.clone(), deployment.clone())
    });

    base_routes(&deployment, &site_root, config.redirect_root)
        .fallback(ssr)
        .layer(TraceLayer::new_for_http())
}

/// Routes that don't involve rendering: health, static files, root redirect.
pub(crate) fn base_routes(deployment: &DeploymentContext, site_root: &Path, redirect_root: bool) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .nest_service(&deployment.resolve(&PKG_DIR), ServeDir::new(site_root.join("pkg")));

    for asset in &PUBLIC_ASSETS {
        router = router.route_service(&deployment.resolve(asset), ServeFile::new(asset_file(site_root, asset)));
    }

    if deployment.is_subpath_deployment && redirect_root {
        let target = root_redirect_target(deployment);
        router = router.route("/", get(move || async move { Redirect::temporary(&target) }));
    }
    router
}

/// On-disk location of a public asset below the site root.
pub(crate) fn asset_file(site_root: &Path, asset: &AssetPath) -> PathBuf {
    site_root.join(asset.as_str().trim_start_matches('/'))
}

pub(crate) fn root_redirect_target(deployment: &DeploymentContext) -> String {
    format!("{}/", deployment.prefix)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
