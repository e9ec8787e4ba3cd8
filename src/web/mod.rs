//! Web API module for CabinetDraft.
//!
//! This module exposes the generators over HTTP so a design front end can
//! request parts lists, drawing coordinates and rendered views, and edit
//! the construction rules.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/bom` - Generate a BOM from a design
//! - `POST /api/drawing` - Generate drawing coordinates from a design
//! - `POST /api/render` - Render SVG views of a design (optional ?scale=)
//! - `GET /api/rules` - Get the effective rules
//! - `PUT /api/rules` - Replace the rule document (merged over defaults)
//! - `POST /api/rules/reset` - Restore the default rules

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::export::svg::{render_drawing, RenderOptions, RenderedViews};
use crate::models::{BomResult, DrawingData, StructuredDesignData};
use crate::parser::normalize_design;
use crate::rules::{merge_json, RuleStore, Rules, RulesSource};
use crate::services::{generate_bom, generate_drawing};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Effective rules and where edits are saved
    rules: Arc<dyn RulesSource>,
}

impl AppState {
    /// Creates a new application state around a rule source.
    pub fn new(rules: impl RulesSource + 'static) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Query parameters for the render endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Pixels per millimetre (defaults to 0.5).
    pub scale: Option<f64>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Helpers
// ============================================================================

/// Normalizes a request body into a design using the current rules.
fn parse_design(body: Value, rules: &Rules) -> Result<StructuredDesignData, (StatusCode, Json<ApiError>)> {
    normalize_design(body, rules)
        .map(|parsed| parsed.design)
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details("Invalid design", format!("{e:#}"))),
            )
        })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/bom - Generate a bill of materials.
async fn create_bom(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult<BomResult> {
    let rules = state.rules.rules();
    let design = parse_design(body, &rules)?;
    Ok(Json(generate_bom(&design, &rules)))
}

/// POST /api/drawing - Generate drawing coordinates.
async fn create_drawing(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<DrawingData> {
    let rules = state.rules.rules();
    let design = parse_design(body, &rules)?;
    let bom = generate_bom(&design, &rules);
    Ok(Json(generate_drawing(&design, &bom, &rules)))
}

/// POST /api/render - Render SVG views.
async fn render_views(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    Json(body): Json<Value>,
) -> ApiResult<RenderedViews> {
    let options = match query.scale {
        Some(scale) => RenderOptions::new(scale).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details("Invalid scale", e.to_string())),
            )
        })?,
        None => RenderOptions::default(),
    };

    let rules = state.rules.rules();
    let design = parse_design(body, &rules)?;
    let bom = generate_bom(&design, &rules);
    let drawing = generate_drawing(&design, &bom, &rules);
    Ok(Json(render_drawing(&drawing, &options)))
}

/// GET /api/rules - Get the effective rules.
async fn get_rules(State(state): State<AppState>) -> Json<Rules> {
    Json(state.rules.rules().as_ref().clone())
}

/// PUT /api/rules - Replace the rule document.
///
/// The body may be partial; missing keys take their default values.
async fn update_rules(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult<Rules> {
    if !body.is_object() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Rules must be a JSON object")),
        ));
    }

    let mut merged = serde_json::to_value(Rules::default()).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to serialize defaults", e.to_string())),
        )
    })?;
    merge_json(&mut merged, body);

    let rules: Rules = serde_json::from_value(merged).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid rules", e.to_string())),
        )
    })?;

    state.rules.save(&rules).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to save rules", format!("{e:#}"))),
        )
    })?;

    Ok(Json(rules))
}

/// POST /api/rules/reset - Restore the default rules.
async fn reset_rules(State(state): State<AppState>) -> ApiResult<Rules> {
    state.rules.reset().map(Json).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to reset rules", format!("{e:#}"))),
        )
    })
}

// ============================================================================
// Router and Server
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server is meant to run next to a local front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Generator endpoints
        .route("/api/bom", post(create_bom))
        .route("/api/drawing", post(create_drawing))
        .route("/api/render", post(render_views))
        // Rule endpoints
        .route("/api/rules", get(get_rules).put(update_rules))
        .route("/api/rules/reset", post(reset_rules))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `store` - Rule document backing the rule endpoints
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(store: RuleStore, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Rules document: {}", store.path().display());
    let app = create_router(AppState::new(store));

    info!("Starting CabinetDraft web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
