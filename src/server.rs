use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use crate::agenda::{AgendaView, SystemClock, ViewMode};
use crate::pages;
use crate::routes::PageId;
use crate::schedule::FixtureEvents;

pub struct SiteConfig {
    pub root: PathBuf,
}

/// Builds the site router: the two fixture endpoints (plus the
/// extensionless schedule alias the calendar components fetch) and a
/// fallback that renders whatever page the path resolves to.
pub fn router(config: SiteConfig) -> Router {
    Router::new()
        .route("/api/kenny-images.json", get(handle_images))
        .route("/api/kenny-schedule.json", get(handle_schedule))
        .route("/api/kenny-schedule", get(handle_schedule))
        .fallback(handle_page)
        .with_state(Arc::new(config))
}

async fn read_fixture(path: PathBuf) -> anyhow::Result<Value> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// Serves the image fixture verbatim. A missing or corrupt file fails this
/// one request with a 500; there is no fallback content.
async fn handle_images(State(site): State<Arc<SiteConfig>>) -> Response {
    match read_fixture(site.root.join("kenny-images.json")).await {
        Ok(images) => Json(images).into_response(),
        Err(err) => {
            log::error!("failed to load image fixture: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to load images").into_response()
        }
    }
}

/// Serves the schedule array extracted from the wrapped fixture document.
/// An absent `"kenny-schedule"` key unwraps to an empty array.
async fn handle_schedule(State(site): State<Arc<SiteConfig>>) -> Response {
    let path = site.root.join("api").join("kenny-schedule.json");
    match read_fixture(path).await {
        Ok(mut doc) => {
            let schedule = match doc.get_mut("kenny-schedule") {
                Some(entries) => entries.take(),
                None => Value::Array(Vec::new()),
            };
            Json(schedule).into_response()
        }
        Err(err) => {
            log::error!("failed to load schedule fixture: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to load schedule").into_response()
        }
    }
}

/// Resolves the request path to a page and renders it. Pages that show an
/// agenda activate a view against the on-disk schedule; a broken fixture
/// degrades to an empty grid here rather than failing the page.
async fn handle_page(State(site): State<Arc<SiteConfig>>, uri: Uri) -> Html<String> {
    let page = PageId::resolve(uri.path());
    let source = FixtureEvents::new(site.root.clone());

    let body = match page {
        PageId::Home => {
            let mut week = AgendaView::new(ViewMode::Week, SystemClock);
            week.activate(&source).await;
            pages::body(page, None, Some(&week.view()))
        }
        PageId::Schedule => {
            let mut month = AgendaView::new(ViewMode::Month, SystemClock);
            month.activate(&source).await;
            let mut week = AgendaView::new(ViewMode::Week, SystemClock);
            week.activate(&source).await;
            pages::body(page, Some(&month.view()), Some(&week.view()))
        }
        PageId::Team | PageId::About => pages::body(page, None, None),
    };

    Html(pages::shell(page, &body))
}
