//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Name of the single-page entry point inside the dist directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the top-level axum [`Router`].
///
/// Serves files from `dist_dir`; any path without a matching file gets
/// `index.html`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(dist_dir: &Path) -> Router {
    let index = dist_dir.join(INDEX_FILE);
    if !index.is_file() {
        tracing::warn!(
            dist_dir = %dist_dir.display(),
            "dashboard index not found, build the dashboard before serving it"
        );
    }

    let assets = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><title>evalboard</title>";

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("evalboard-router-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(INDEX_FILE), INDEX_HTML).unwrap();
        std::fs::write(dir.join("app.js"), "console.log('hi');").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(&dist_dir("health"));
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_serve_asset_when_file_exists() {
        let app = build(&dist_dir("asset"));
        let (status, body) = get_body(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");
    }

    #[tokio::test]
    async fn should_serve_index_at_root() {
        let app = build(&dist_dir("root"));
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn should_fall_back_to_index_for_client_routes() {
        let app = build(&dist_dir("fallback"));
        let (status, body) = get_body(app, "/reports?total_projects=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn should_return_not_found_when_dist_dir_missing() {
        let missing = std::env::temp_dir().join("evalboard-router-does-not-exist");
        let app = build(&missing);
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
