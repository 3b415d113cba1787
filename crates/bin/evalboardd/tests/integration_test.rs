//! End-to-end smoke tests for the evalboardd HTTP stack.
//!
//! Each test builds the real router over a throwaway dist directory and
//! exercises it via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use evalboard_adapter_http_axum::router;
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX_HTML: &str = r#"<!DOCTYPE html><html lang="es"><body></body></html>"#;

/// Build a router backed by a dist directory holding a fake dashboard build.
fn app(name: &str) -> axum::Router {
    let dir = dist_dir(name);
    router::build(&dir)
}

fn dist_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "evalboardd-it-{name}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(dir.join("assets")).expect("dist dir should be creatable");
    std::fs::write(dir.join("index.html"), INDEX_HTML).expect("index should be writable");
    std::fs::write(dir.join("assets/evalboard.css"), ".button{}").expect("css should be writable");
    dir
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app("health")
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "OK");
}

// ---------------------------------------------------------------------------
// Dashboard assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_dashboard_index_as_html() {
    let resp = app("index")
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(body_string(resp).await, INDEX_HTML);
}

#[tokio::test]
async fn should_serve_nested_asset_with_its_mime_type() {
    let resp = app("nested")
        .oneshot(
            Request::builder()
                .uri("/assets/evalboard.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );
}

#[tokio::test]
async fn should_serve_index_for_unknown_client_route() {
    let resp = app("client-route")
        .oneshot(
            Request::builder()
                .uri("/?total_projects=10&recent_projects=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX_HTML);

    let resp = app("deep-route")
        .oneshot(
            Request::builder()
                .uri("/projects/42/evaluation")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX_HTML);
}
