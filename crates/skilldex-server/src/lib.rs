//! # skilldex-server
//!
//! HTTP API server for skilldex. Provides:
//!
//! - `GET /` — liveness acknowledgement
//! - `GET /api/skills` — list with optional filter/sort query params
//! - `GET /api/skills/{id}` — single record lookup
//! - `GET /api/skills/category/{category}` — exact category listing
//!
//! Every data-bearing request re-reads the source file through
//! [`SkillStore`]; there is no cross-request cache.

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use skilldex_config::schema::ServerConfig;
use skilldex_core::{Skill, SkillId};
use skilldex_store::{SkillQuery, SkillStore};

/// Shared server state.
pub struct AppState {
    pub config: ServerConfig,
    pub store: SkillStore,
}

/// Root acknowledgement response.
#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

/// Envelope for list-style successes.
#[derive(Serialize)]
struct ListResponse {
    success: bool,
    count: usize,
    data: Vec<Skill>,
}

impl ListResponse {
    fn of(data: Vec<Skill>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Envelope for list-style failures.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    error: String,
}

impl ErrorResponse {
    fn reading(err: &skilldex_core::SkilldexError) -> Self {
        Self {
            success: false,
            message: "Error reading skills data".into(),
            error: err.to_string(),
        }
    }
}

/// Build the Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = state.config.cors;

    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/api/skills", get(list_skills_handler))
        .route("/api/skills/{id}", get(skill_by_id_handler))
        .route(
            "/api/skills/category/{category}",
            get(skills_by_category_handler),
        )
        .fallback(fallback_handler)
        .layer(middleware::from_fn(log_requests))
        .with_state(state);

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Middleware that logs every inbound request. Observability only —
/// timestamps come from the tracing subscriber.
async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    info!(%method, %path, "request");
    next.run(request).await
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "skilldex API is running".into(),
    })
}

/// `GET /api/skills?proficiency=&category=&sort=`
///
/// Filters apply as sequential narrowing; `sort=name` orders ascending
/// by name, anything else keeps source order.
async fn list_skills_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SkillQuery>,
) -> Response {
    match state.store.load().await {
        Ok(skills) => Json(ListResponse::of(query.apply(skills))).into_response(),
        Err(e) => {
            warn!(error = %e, "failed to load skills data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::reading(&e)),
            )
                .into_response()
        }
    }
}

/// Permissive id parsing: an optional sign followed by the leading
/// digit run, ignoring trailing garbage ("7abc" is 7). No leading
/// digits at all is no-match, never a 400.
fn coerce_id(raw: &str) -> Option<SkillId> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<SkillId>().ok().map(|n| sign * n)
}

/// `GET /api/skills/{id}`
async fn skill_by_id_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let id = coerce_id(&id);

    // A non-numeric id matches nothing, but the source is still read so
    // an unreadable file surfaces as 500 here too.
    let found = match id {
        Some(id) => state.store.find_by_id(id).await,
        None => state.store.load().await.map(|_| None),
    };

    match found {
        Ok(Some(skill)) => Json(skill).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Skill not found" })),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "failed to load skills data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// `GET /api/skills/category/{category}`
///
/// Exact case-insensitive category match — not the substring behavior
/// of the `category` query param on `/api/skills`.
async fn skills_by_category_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    match state.store.find_by_category(&category).await {
        Ok(skills) => Json(ListResponse::of(skills)).into_response(),
        Err(e) => {
            warn!(error = %e, "failed to load skills data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::reading(&e)),
            )
                .into_response()
        }
    }
}

/// Catch-all for unmatched routes.
async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "success": false, "message": "Route not found" })),
    )
        .into_response()
}

/// Start the HTTP server.
pub async fn start_server(config: ServerConfig, store: SkillStore) -> skilldex_core::Result<()> {
    let listen = config.listen.clone();
    let state = Arc::new(AppState { config, store });
    let router = build_router(state);

    info!(listen = %listen, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| {
            skilldex_core::SkilldexError::Server(format!("failed to bind {listen}: {e}"))
        })?;

    axum::serve(listener, router)
        .await
        .map_err(|e| skilldex_core::SkilldexError::Server(format!("server error: {e}")))?;

    Ok(())
}
