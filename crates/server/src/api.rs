//! HTTP surface for the suggestion engine.
//!
//! Endpoints:
//! - `GET  /`             — service banner
//! - `POST /api/generate` — rank the catalog against a preference profile
//! - `GET  /api/history`  — list persisted generation events, newest first
//!
//! Persisting the generation event is fail open: one best-effort write, any
//! store error is logged and discarded, and the ranked suggestions are
//! returned regardless.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use namery_core::config::CorsConfig;
use namery_core::{
    ApplicationError, GenerationEvent, InterfaceError, Preference, Suggestion, SuggestionEngine,
    DEFAULT_QUANTITY,
};
use namery_db::GenerationRepository;

const DEFAULT_HISTORY_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct ApiState {
    engine: SuggestionEngine,
    generations: Arc<dyn GenerationRepository>,
}

impl ApiState {
    pub fn new(engine: SuggestionEngine, generations: Arc<dyn GenerationRepository>) -> Self {
        Self { engine, generations }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/generate", post(generate))
        .route("/api/history", get(history))
        .with_state(state)
}

/// Cross-origin policy from config: permissive for `["*"]`, otherwise an
/// explicit origin allow-list.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub preference: Preference,
    #[serde(default)]
    pub quantity: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

fn default_history_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}

#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: String,
    pub preference: Preference,
    pub suggestions: Vec<Suggestion>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Namery API is running" }))
}

pub async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    let correlation_id = format!("req-{}", Uuid::new_v4());

    if let Err(error) = request.preference.validate() {
        warn!(
            event_name = "api.generate.rejected",
            correlation_id = %correlation_id,
            error = %error,
            "generate request failed validation"
        );
        return Err(reject(ApplicationError::from(error).into_interface(correlation_id)));
    }

    let quantity = request.quantity.unwrap_or(DEFAULT_QUANTITY);
    let suggestions = state.engine.generate(&request.preference, quantity);

    let event = GenerationEvent::new(request.preference, suggestions.clone());
    if let Err(error) = state.generations.record(event).await {
        warn!(
            event_name = "api.generate.persist_failed",
            correlation_id = %correlation_id,
            error = %error,
            "generation event not persisted; responding anyway"
        );
    }

    info!(
        event_name = "api.generate.completed",
        correlation_id = %correlation_id,
        suggestion_count = suggestions.len(),
        "generate request completed"
    );

    Ok(Json(GenerateResponse { suggestions }))
}

pub async fn history(
    State(state): State<ApiState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ApiError>)> {
    let correlation_id = format!("req-{}", Uuid::new_v4());

    let records = state.generations.list(query.limit).await.map_err(|error| {
        warn!(
            event_name = "api.history.failed",
            correlation_id = %correlation_id,
            error = %error,
            "history listing failed"
        );
        reject(
            ApplicationError::Persistence(error.to_string()).into_interface(correlation_id.clone()),
        )
    })?;

    let items = records
        .into_iter()
        .map(|record| HistoryItem {
            id: record.id.0,
            preference: record.preference,
            suggestions: record.suggestions,
            notes: record.notes,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        })
        .collect();

    Ok(Json(HistoryResponse { items }))
}

fn reject(error: InterfaceError) -> (StatusCode, Json<ApiError>) {
    let status = match &error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let correlation_id = match &error {
        InterfaceError::BadRequest { correlation_id, .. }
        | InterfaceError::ServiceUnavailable { correlation_id, .. }
        | InterfaceError::Internal { correlation_id, .. } => correlation_id.clone(),
    };

    (status, Json(ApiError { error: error.user_message().to_string(), correlation_id }))
}
