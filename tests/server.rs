use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use kenny_site::server::{router, SiteConfig};

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

/// A throwaway site root under the system temp dir, removed on drop.
struct SiteRoot(PathBuf);

impl SiteRoot {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!(
            "kenny-site-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(dir.join("api")).expect("create site root");
        Self(dir)
    }

    fn write(&self, rel: &str, contents: &str) {
        fs::write(self.0.join(rel), contents).expect("write fixture");
    }

    fn router(&self) -> axum::Router {
        router(SiteConfig {
            root: self.0.clone(),
        })
    }
}

impl Drop for SiteRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

async fn get(app: axum::Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec();
    (status, body)
}

async fn get_json(app: axum::Router, path: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, path).await;
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}

#[tokio::test]
async fn images_endpoint_serves_fixture_verbatim() {
    let site = SiteRoot::new();
    site.write(
        "kenny-images.json",
        r#"[{"id": 1, "src": "/images/team.jpg", "alt": "the team", "caption": "Season opener"}]"#,
    );

    let (status, images) = get_json(site.router(), "/api/kenny-images.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        images,
        json!([{"id": 1, "src": "/images/team.jpg", "alt": "the team", "caption": "Season opener"}])
    );
}

#[tokio::test]
async fn missing_images_fixture_is_a_500() {
    let site = SiteRoot::new();
    let (status, _) = get(site.router(), "/api/kenny-images.json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn schedule_endpoint_unwraps_the_document() {
    let site = SiteRoot::new();
    site.write(
        "api/kenny-schedule.json",
        r#"{"kenny-schedule": [{"name": "Scrimmage", "date": "2025-03-10"}]}"#,
    );

    let (status, schedule) = get_json(site.router(), "/api/kenny-schedule.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule, json!([{"name": "Scrimmage", "date": "2025-03-10"}]));
}

#[tokio::test]
async fn schedule_alias_serves_the_same_array() {
    let site = SiteRoot::new();
    site.write(
        "api/kenny-schedule.json",
        r#"{"kenny-schedule": [{"title": "Practice", "date": "2025-03-12"}]}"#,
    );

    let (status, schedule) = get_json(site.router(), "/api/kenny-schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule, json!([{"title": "Practice", "date": "2025-03-12"}]));
}

#[tokio::test]
async fn schedule_without_wrapper_key_unwraps_to_empty() {
    let site = SiteRoot::new();
    site.write("api/kenny-schedule.json", r#"{"something-else": true}"#);

    let (status, schedule) = get_json(site.router(), "/api/kenny-schedule.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule, json!([]));
}

#[tokio::test]
async fn corrupt_schedule_fixture_is_a_500() {
    let site = SiteRoot::new();
    site.write("api/kenny-schedule.json", "not json at all");

    let (status, _) = get(site.router(), "/api/kenny-schedule.json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn pages_render_for_every_route() {
    let site = SiteRoot::new();
    site.write("api/kenny-schedule.json", r#"{"kenny-schedule": []}"#);

    for (path, heading) in [
        ("/", "Welcome to Kenny Sports!"),
        ("/schedule", "Full Schedule"),
        ("/schedule/games", "Full Schedule"),
        ("/team", "Meet the Team!"),
        ("/about", "About Kenny Sports"),
        // Unknown and near-miss paths fall back to home.
        ("/unknown/path", "Welcome to Kenny Sports!"),
        ("/teamwork", "Welcome to Kenny Sports!"),
    ] {
        let (status, body) = get(site.router(), path).await;
        let html = String::from_utf8(body).expect("utf8 page");

        assert_eq!(status, StatusCode::OK, "path {path}");
        assert!(html.contains(heading), "path {path} missing {heading:?}");
    }
}

#[tokio::test]
async fn schedule_page_renders_even_without_the_fixture() {
    // No fixture on disk: the agenda degrades to an empty grid, never a 5xx.
    let site = SiteRoot::new();

    let (status, body) = get(site.router(), "/schedule").await;
    let html = String::from_utf8(body).expect("utf8 page");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("calendar-grid"));
    assert!(!html.contains("event-item"));
}

#[tokio::test]
async fn schedule_page_shows_fixture_events() {
    let site = SiteRoot::new();
    // Dated today so the event falls inside the rendered month no matter
    // when the test runs.
    let today = chrono::Local::now().date_naive();
    site.write(
        "api/kenny-schedule.json",
        &format!(r#"{{"kenny-schedule": [{{"name": "Scrimmage", "date": "{today}"}}]}}"#),
    );

    let (status, body) = get(site.router(), "/schedule").await;
    let html = String::from_utf8(body).expect("utf8 page");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Scrimmage"));
}
