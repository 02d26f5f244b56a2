//! # API REST
//!
//! REST API implementation for the todo roaster.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `roaster-core` for roast generation.

#![warn(rust_2018_idioms)]

use api_shared::{ErrorRes, HealthRes, HealthService, RoastReq, RoastRes};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use roaster_core::{todos_from_body, RoastError, RoastService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
///
/// Holds only the roast service; every request's todo and roast lists stay local to the handler.
#[derive(Clone)]
pub struct AppState {
    pub roast_service: RoastService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, roast),
    components(schemas(HealthRes, RoastReq, RoastRes, ErrorRes))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/roast", post(roast))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves [`router`] until the process is stopped.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_on(listener, state).await
}

/// Serves [`router`] on an already bound listener.
pub async fn serve_on(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    tracing::info!("-- Roaster REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and by `roaster health`.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/roast",
    request_body = RoastReq,
    responses(
        (status = 200, description = "One roast per todo, in input order", body = RoastRes),
        (status = 400, description = "todos missing, not an array, or empty", body = ErrorRes),
        (status = 500, description = "The batch could not be processed", body = ErrorRes)
    )
)]
/// Roast every todo in the request body
///
/// The body is decoded by hand so that the status codes stay fixed: a body that is not JSON at
/// all, or is `null`, is a server error, while other JSON without a usable `todos` array is a
/// bad request. Non-string elements are roasted as their text form.
/// Individual provider failures do not fail the request; those positions carry the fallback
/// roast instead.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - `todos` is missing, not an array, or empty.
///
/// Returns `500 Internal Server Error` if:
/// - the body is not valid JSON or is `null`, or
/// - generation fails outside the per-item recovery.
#[axum::debug_handler]
async fn roast(State(state): State<AppState>, body: Bytes) -> Result<Json<RoastRes>, ApiError> {
    let body: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Error generating roasts: {:?}", e);
            return Err(internal_error());
        }
    };

    let todos = match todos_from_body(&body) {
        Ok(todos) => todos,
        Err(RoastError::InvalidBatch) => return Err(bad_request()),
        Err(e) => {
            tracing::error!("Error generating roasts: {:?}", e);
            return Err(internal_error());
        }
    };

    match state.roast_service.generate(&todos).await {
        Ok(roasts) => Ok(Json(RoastRes { roasts })),
        Err(RoastError::InvalidBatch) => Err(bad_request()),
        Err(e) => {
            tracing::error!("Error generating roasts: {:?}", e);
            Err(internal_error())
        }
    }
}

fn bad_request() -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorRes::no_todos()))
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorRes::generation_failed()),
    )
}
