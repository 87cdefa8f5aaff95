use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::router::ApiDoc,
};

pub static META_TAG: &str = "meta";

/// GET /api/health - Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = META_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// GET /api/openapi.json - OpenAPI document describing the `/api` routes
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Fallback for unknown `/api/*` paths.
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
