//! Application errors and their HTTP rendering.
//!
//! Concern-specific enums (`ConfigError`, `BotError`) convert into `AppError`, which
//! API handlers return directly. Client-facing bodies are always `{"error": "..."}`.

pub mod bot;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{bot::BotError, config::ConfigError},
};

/// Every failure the server, bot or scheduler can surface.
///
/// Handlers return `Result<_, AppError>` and let axum render the error; the bot and
/// scheduler only log it.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid environment value at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    BotErr(#[from] BotError),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Creating the database directory or binding the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 carrying a message safe to show to clients.
    #[error("{0}")]
    NotFound(String),

    /// 400 carrying a validation message safe to show to clients.
    #[error("{0}")]
    BadRequest(String),

    /// 500 whose message is only written to the log.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            Self::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders any displayable error as a 500, logging the detail and returning only a
/// generic message in the body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

#[cfg(test)]
mod test {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_keeps_message() {
        let response = AppError::NotFound("User not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await["error"], "User not found");
    }

    #[tokio::test]
    async fn bad_request_keeps_message() {
        let response = AppError::BadRequest("Username must not be empty".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await["error"], "Username must not be empty");
    }

    #[tokio::test]
    async fn internal_error_message_is_not_leaked() {
        let response = AppError::InternalError("token 123:abc rejected".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["error"], "Internal server error");
    }

    #[tokio::test]
    async fn database_errors_are_hidden() {
        let response =
            AppError::DbErr(sea_orm::DbErr::Custom("disk I/O error".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["error"], "Internal server error");
    }
}
