#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests driving the axum router built from the route registry.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use safeloop_site::config::Config;
use safeloop_site::routes;
use safeloop_site::state::AppState;

fn test_app() -> Router {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = Config {
        port: 0,
        templates_dir: root.join("templates"),
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        cors_allowed_origins: vec!["*".to_string()],
        site_url: "http://localhost".to_string(),
    };

    let state = AppState::new(&config).unwrap();
    routes::router(state.routes()).with_state(state)
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn front_page_renders_with_navigation() {
    let (status, body) = get(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SafeLoop"));
    // Navigation is derived from the registry, in registry order.
    assert!(body.contains("href=\"/about\""));
    assert!(body.contains("href=\"/pricing\""));
    assert!(body.contains("href=\"/blog\""));
    assert!(body.contains("href=\"/contact\""));
    // Hidden-from-nav routes still get header links through route_path.
    assert!(body.contains("href=\"/login\""));
    assert!(body.contains("href=\"/register\""));
}

#[tokio::test]
async fn blog_index_deep_links_through_the_registry() {
    let (status, body) = get(test_app(), "/blog").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured Article"));
    // Links are generated from the /blog/:slug pattern, not hard-coded.
    assert!(body.contains("href=\"/blog/first-solo-walk-to-school\""));
}

#[tokio::test]
async fn blog_single_renders_markdown_body() {
    let (status, body) =
        get(test_app(), "/blog/how-safeloop-keeps-your-family-connected").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("How SafeLoop keeps your family connected"));
    assert!(body.contains("<h2>Always in the loop</h2>"));
    assert!(body.contains("<li>Real-time location updates every 30 seconds</li>"));
    // The fixture date is ISO; the format_date filter renders it readably.
    assert!(body.contains("June 12, 2026"));
    assert!(!body.contains("2026-06-12"));
}

#[tokio::test]
async fn unknown_blog_slug_is_styled_404() {
    let (status, body) = get(test_app(), "/blog/no-such-post").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn unknown_path_is_styled_404() {
    let (status, body) = get(test_app(), "/checkout").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn front_page_renders_all_testimonials() {
    let (status, body) = get(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    // With no client-side "show more" toggle, the full set is rendered.
    assert!(body.contains("Sofia Almgren"));
    assert!(body.contains("Henrik Dahl"));
    assert!(body.contains("Lucia Moretti"));
}

#[tokio::test]
async fn pricing_page_renders_all_plans() {
    let (status, body) = get(test_app(), "/pricing").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Starter"));
    assert!(body.contains("Family Plus"));
    // Both billing intervals are rendered; the toggle is presentational.
    assert!(body.contains("/ month"));
    assert!(body.contains("/ year"));
}

#[tokio::test]
async fn about_page_renders_team_and_jobs() {
    let (status, body) = get(test_app(), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Maya Lindqvist"));
    assert!(body.contains("Senior Firmware Engineer"));
}

#[tokio::test]
async fn auth_pages_render_presentational_forms() {
    let (status, body) = get(test_app(), "/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome back"));
    // Forms submit nowhere.
    assert!(!body.contains("action="));

    let (status, body) = get(test_app(), "/register").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Join SafeLoop"));
}

#[tokio::test]
async fn auth_forms_are_get_only() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_serving_state() {
    let (status, body) = get(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"healthy\""));
}

#[tokio::test]
async fn static_files_are_served_with_content_type() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/css/site.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/css"
    );
}

#[tokio::test]
async fn static_files_reject_path_traversal() {
    let app = test_app();
    let (status, _) = get(app, "/static/..%2f..%2fCargo.toml").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
