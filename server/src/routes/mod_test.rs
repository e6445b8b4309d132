use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("ehya").site_root("target/site").build()
}

fn test_app(compression: bool) -> Router {
    app(test_options(), &ServerConfig { compression, ..ServerConfig::default() })
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_reports_ok_and_version() {
    let (status, body) = get_body(test_app(false), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, body) = get_body(test_app(false), "/definitely/not/here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Page not found.");
}

#[tokio::test]
async fn landing_page_renders_all_sections() {
    let (status, body) = get_body(test_app(false), "/").await;
    assert_eq!(status, StatusCode::OK);
    for needle in [
        "We help you grow your business faster",
        "Hashtag Location",
        "Jaquon Hart",
        "Contact Us",
        "Send Message",
        "Crafted with love.",
    ] {
        assert!(body.contains(needle), "missing {needle:?}");
    }
}

#[tokio::test]
async fn landing_page_starts_with_closed_menu_and_no_errors() {
    let (_, body) = get_body(test_app(false), "/").await;
    assert!(body.contains("Open menu"));
    assert!(!body.contains("is required"));
    assert!(!body.contains("Thank you for your message!"));
}

#[tokio::test]
async fn landing_page_includes_analytics_tag() {
    let (_, body) = get_body(test_app(false), "/").await;
    assert!(body.contains("https://www.googletagmanager.com/gtag/js?id=G-SNZ7G7X9F0"));
    assert!(body.contains("window.dataLayer = window.dataLayer || [];"));
}

#[tokio::test]
async fn compression_disabled_sends_identity_body() {
    let response = test_app(false)
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
}

#[tokio::test]
async fn compression_enabled_gzips_when_accepted() {
    let response = test_app(true)
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).and_then(|v| v.to_str().ok()),
        Some("gzip")
    );
}
