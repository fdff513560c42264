use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

fn subpath() -> DeploymentContext {
    DeploymentContext { is_subpath_deployment: true, prefix: "/pora".to_owned() }
}

fn root() -> DeploymentContext {
    DeploymentContext::default()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[test]
fn asset_file_strips_leading_slash() {
    let path = asset_file(Path::new("/srv/site"), &AssetPath::from_static("/icon-512x512.png"));
    assert_eq!(path, PathBuf::from("/srv/site/icon-512x512.png"));
}

#[test]
fn root_redirect_target_is_prefix_with_slash() {
    assert_eq!(root_redirect_target(&subpath()), "/pora/");
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = base_routes(&root(), Path::new("target/site"), true);
    let resp = router.oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn subpath_root_redirects_to_prefix() {
    let router = base_routes(&subpath(), Path::new("target/site"), true);
    let resp = router.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/pora/");
}

#[tokio::test]
async fn subpath_root_redirect_can_be_disabled() {
    let router = base_routes(&subpath(), Path::new("target/site"), false);
    let resp = router.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_deployment_does_not_redirect() {
    let router = base_routes(&root(), Path::new("target/site"), true);
    let resp = router.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_public_asset_is_not_found_at_resolved_url() {
    let router = base_routes(&subpath(), Path::new("/nonexistent-site-root"), true);
    let resp = router.oneshot(get_request("/pora/manifest.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

fn shipped_site_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../public")
}

#[tokio::test]
async fn public_assets_are_served_at_resolved_subpath_urls() {
    for asset in &PUBLIC_ASSETS {
        let url = subpath().resolve(asset);
        assert!(url.starts_with("/pora/"));
        let router = base_routes(&subpath(), &shipped_site_root(), true);
        let resp = router.oneshot(get_request(&url)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{url}");
    }
}

#[tokio::test]
async fn public_asset_is_not_served_outside_the_subpath() {
    let router = base_routes(&subpath(), &shipped_site_root(), true);
    let resp = router.oneshot(get_request("/icon-192x192.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
