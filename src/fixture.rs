//! Fixture Content Server
//!
//! A local stand-in for the content API, built with Axum. Serves canned
//! envelopes for every section endpoint and records the bodies posted to
//! the contact and analytics endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/*path` - Envelope for a section path (`about`, `skills`, ...)
//! - `GET /api/resume/download/:id` - Placeholder resume document
//! - `POST /api/contact` - Record a contact submission
//! - `POST /api/analytics/track-view` - Record a page view
//! - `GET /fixture/received` - Everything posted so far
//!
//! Any path can be forced to answer with a fixed status through
//! [`FixtureState::force_status`].

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Prefix under which the fixture mounts the content API
pub const API_PREFIX: &str = "/api";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// One recorded POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Received {
    pub path: String,
    pub body: Value,
}

/// Shared state behind the fixture router
#[derive(Debug, Default)]
pub struct FixtureState {
    content: RwLock<HashMap<String, Value>>,
    forced: RwLock<HashMap<String, u16>>,
    received: RwLock<Vec<Received>>,
}

impl FixtureState {
    /// Empty fixture: every GET answers 404
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixture preloaded with a small sample portfolio
    pub fn with_sample_content() -> Self {
        Self {
            content: RwLock::new(sample_content()),
            ..Self::default()
        }
    }

    /// Serve `data` inside a successful envelope at `path` (relative to `/api`)
    pub async fn set_content(&self, path: &str, data: Value) {
        self.content
            .write()
            .await
            .insert(normalize(path), data);
    }

    /// Answer every request to `path` with `status` and a failed envelope
    pub async fn force_status(&self, path: &str, status: u16) {
        self.forced.write().await.insert(normalize(path), status);
    }

    pub async fn clear_forced(&self) {
        self.forced.write().await.clear();
    }

    pub async fn received(&self) -> Vec<Received> {
        self.received.read().await.clone()
    }

    async fn forced_status(&self, path: &str) -> Option<StatusCode> {
        let forced = self.forced.read().await;
        forced
            .get(path)
            .and_then(|code| StatusCode::from_u16(*code).ok())
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches(API_PREFIX)
        .trim_matches('/')
        .to_string()
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

/// Build the fixture router
pub fn build_router(state: Arc<FixtureState>) -> Router {
    let api_routes = Router::new()
        .route("/contact", post(record_post))
        .route("/analytics/track-view", post(record_post))
        .route("/resume/download/:id", get(download_resume))
        .route("/*path", get(serve_content));

    let fixture_routes = Router::new().route("/received", get(list_received));

    Router::new()
        .nest(API_PREFIX, api_routes)
        .nest("/fixture", fixture_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn serve_content(
    State(state): State<Arc<FixtureState>>,
    Path(path): Path<String>,
) -> Response {
    let path = normalize(&path);

    if let Some(status) = state.forced_status(&path).await {
        return failure(status, "Forced failure");
    }

    match state.content.read().await.get(&path) {
        Some(data) => Json(json!({ "success": true, "data": data })).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Not found"),
    }
}

async fn download_resume(
    State(state): State<Arc<FixtureState>>,
    Path(id): Path<String>,
) -> Response {
    if let Some(status) = state.forced_status("resume/download").await {
        return failure(status, "Forced failure");
    }

    (
        [("content-type", "application/pdf")],
        format!("%PDF-1.4\n% fixture resume {}\n", id),
    )
        .into_response()
}

async fn record_post(
    State(state): State<Arc<FixtureState>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let path = normalize(uri.path());

    if let Some(status) = state.forced_status(&path).await {
        return failure(status, "Forced failure");
    }

    tracing::info!(path = %path, "Fixture received POST");
    state.received.write().await.push(Received { path, body });

    Json(json!({ "success": true, "message": "Received" })).into_response()
}

async fn list_received(State(state): State<Arc<FixtureState>>) -> Json<Vec<Received>> {
    Json(state.received().await)
}

/// Bind `addr` and serve the fixture in a background task.
///
/// Returns the bound address, which matters when `addr` uses port 0.
pub async fn spawn(
    state: Arc<FixtureState>,
    addr: &str,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), FixtureError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let router = build_router(state);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Fixture server error: {}", e);
        }
    });

    tracing::info!("Fixture content API listening on {}", local_addr);
    Ok((local_addr, handle))
}

/// Serve the fixture in the foreground until Ctrl+C
pub async fn serve(state: Arc<FixtureState>, addr: &str) -> Result<(), FixtureError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Fixture content API listening on {}", local_addr);
    tracing::info!("Point FOLIO_API_URL at http://{}{}", local_addr, API_PREFIX);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FixtureError::Server(e.to_string()))?;

    tracing::info!("Fixture server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Canned portfolio content, keyed by path relative to `/api`
pub fn sample_content() -> HashMap<String, Value> {
    let mut content = HashMap::new();

    content.insert(
        "about".to_string(),
        json!({
            "name": "Sam Rivera",
            "title": "Systems Engineer",
            "subtitle": "Building fast, reliable software",
            "description": "I design services and tools that stay up.",
            "github": "https://github.com/example",
            "linkedin": "https://linkedin.com/in/example",
            "technologyTags": ["Rust", "Tokio", "PostgreSQL"],
            "aboutSectionTitle": "About **Me**",
            "aboutText": "Ten years of backend work across storage and networking.",
            "aboutHighlights": [
                "Reliability: On-call for high-traffic APIs",
                "Performance: Profiling and tuning hot paths"
            ],
            "experience": "10 years",
            "education": "BSc Computer Science",
            "location": "Lisbon",
            "email": "sam@example.com",
            "projectsCompleted": "40+",
            "yearsExperience": "10",
            "technologies": "20+",
            "certifications": "3"
        }),
    );

    content.insert(
        "resume/info".to_string(),
        json!({
            "id": "resume-2025",
            "originalName": "sam-rivera-resume.pdf",
            "size": 48213,
            "uploadDate": "2025-01-15T10:00:00Z"
        }),
    );

    content.insert(
        "skills".to_string(),
        json!([
            {
                "_id": "s2",
                "category": "Backend Development",
                "skills": [{ "name": "Rust", "level": 95 }, { "name": "Go", "level": 80 }],
                "order": 2,
                "isActive": true
            },
            {
                "_id": "s1",
                "category": "Frontend Development",
                "skills": [{ "name": "TypeScript", "level": 85 }],
                "order": 1,
                "isActive": true
            },
            {
                "_id": "s3",
                "category": "Data Science",
                "skills": [{ "name": "Pandas", "level": 40 }],
                "order": 3,
                "isActive": false
            }
        ]),
    );

    content.insert(
        "skills/additional-technologies".to_string(),
        json!(["Docker", "Kubernetes", "Terraform"]),
    );

    content.insert(
        "projects".to_string(),
        json!([
            {
                "_id": "p3",
                "title": "Log Shipper",
                "description": "Tails and forwards structured logs.",
                "technologies": ["Rust", "Tokio", "Kafka", "S3"],
                "github": "https://github.com/example/log-shipper",
                "featured": true,
                "order": 2,
                "status": "active"
            },
            {
                "_id": "p1",
                "title": "Edge Cache",
                "description": "An HTTP cache in front of slow origins.",
                "technologies": ["Rust", "Hyper"],
                "live": "https://cache.example.com",
                "featured": true,
                "order": 1,
                "status": "active"
            },
            {
                "_id": "p2",
                "title": "Old Dashboard",
                "description": "Retired.",
                "technologies": ["jQuery"],
                "order": 0,
                "status": "archived"
            }
        ]),
    );

    content.insert(
        "projects/settings".to_string(),
        json!({
            "projectsTitle": "Selected Work",
            "projectsSubtitle": "Things I have shipped",
            "viewAllButtonText": "All Projects",
            "viewAllButtonUrl": "/projects",
            "showViewAllButton": true,
            "maxFeaturedProjects": 6
        }),
    );

    content.insert(
        "contact/settings".to_string(),
        json!({
            "email": "sam@example.com",
            "phone": "+351 900 000 000",
            "city": "Lisbon",
            "country": "Portugal",
            "contactTitle": "Say Hello",
            "contactSubtitle": "Open to new roles",
            "contactDescription": "Reach out about systems work.",
            "formEnabled": true
        }),
    );

    content.insert(
        "footer".to_string(),
        json!({
            "copyright": "© 2025 Sam Rivera",
            "tagline": "Fast, reliable software",
            "description": "Systems engineer based in Lisbon.",
            "socialLinks": [{ "name": "GitHub", "url": "https://github.com/example", "icon": "github" }],
            "quickLinks": [],
            "contactInfo": { "email": "sam@example.com", "phone": "", "address": "Lisbon" }
        }),
    );

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<FixtureState>) {
        let state = Arc::new(FixtureState::with_sample_content());
        (build_router(Arc::clone(&state)), state)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_serves_section_envelope() {
        let (app, _state) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/projects/settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["projectsTitle"], "Selected Work");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (app, _state) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/api/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_forced_status() {
        let (app, state) = create_test_app();
        state.force_status("/api/about", 500).await;

        let response = app
            .oneshot(Request::builder().uri("/api/about").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_records_posts() {
        let (app, state) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analytics/track-view")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"page":"home","sessionId":"abc"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let received = state.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].path, "analytics/track-view");
        assert_eq!(received[0].body["sessionId"], "abc");
    }

    #[tokio::test]
    async fn test_forced_post_is_not_recorded() {
        let (app, state) = create_test_app();
        state.force_status("contact", 503).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"firstName":"Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(state.received().await.is_empty());
    }

    #[tokio::test]
    async fn test_resume_download() {
        let (app, _state) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/resume/download/resume-2025")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/pdf"
        );
    }
}
