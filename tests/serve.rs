#![cfg(feature = "serve")]

use std::{fs, path::Path};

use axum::body::{to_bytes, Body};
use http::{header, Request, StatusCode};
use portfolio_site::{config::SiteConfig, server::router};
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>portfolio shell</body></html>";

fn site() -> (TempDir, SiteConfig) {
    let dir = tempfile::tempdir().expect("should be able to create temp dir");
    write(dir.path(), "index.html", INDEX);
    write(dir.path(), "portfolio-site.js", "export default function init() {}");
    fs::create_dir_all(dir.path().join("assets/projects")).unwrap();
    write(dir.path(), "assets/projects/jobby-app.png", "png");

    let config = SiteConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        root: dir.path().to_path_buf(),
    };
    (dir, config)
}

fn write(root: &Path, name: &str, contents: &str) {
    fs::write(root.join(name), contents).expect("should be able to write fixture");
}

async fn get(config: &SiteConfig, uri: &str) -> (StatusCode, Option<String>, String) {
    let res = router(config)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_root_serves_index() {
    let (_dir, config) = site();
    let (status, content_type, body) = get(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn test_assets_served_as_files() {
    let (_dir, config) = site();

    let (status, content_type, body) = get(&config, "/portfolio-site.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("javascript"));
    assert!(body.contains("init"));

    let (status, _, body) = get(&config, "/assets/projects/jobby-app.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "png");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let (_dir, config) = site();
    for uri in ["/about", "/contact", "/does/not/exist"] {
        let (status, _, body) = get(&config, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, INDEX, "{uri}");
    }
}
