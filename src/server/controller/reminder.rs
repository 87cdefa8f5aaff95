use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reminder::{CreateReminderDto, ReminderDto, ReminderQueryDto, UpdateReminderDto},
    },
    server::{
        error::AppError,
        model::reminder::{CreateReminderParam, UpdateReminderParam},
        service::reminder::ReminderService,
        state::AppState,
    },
};

pub static REMINDER_TAG: &str = "reminder";

#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = REMINDER_TAG,
    params(ReminderQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved reminders", body = Vec<ReminderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reminders(
    State(state): State<AppState>,
    Query(query): Query<ReminderQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let reminders = ReminderService::new(&state.db)
        .get_all(query.chat_id)
        .await?;

    let reminders_dto: Vec<ReminderDto> = reminders.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reminders_dto)))
}

#[utoipa::path(
    post,
    path = "/api/reminders",
    tag = REMINDER_TAG,
    request_body = CreateReminderDto,
    responses(
        (status = 201, description = "Successfully created reminder", body = ReminderDto),
        (status = 400, description = "Reminder text is blank", body = ErrorDto),
        (status = 404, description = "Chat not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(payload): Json<CreateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let reminder = ReminderService::new(&state.db)
        .create(CreateReminderParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reminder.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reminders/{id}",
    tag = REMINDER_TAG,
    params(
        ("id" = i32, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reminder", body = ReminderDto),
        (status = 404, description = "Reminder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reminder = ReminderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(reminder.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/reminders/{id}",
    tag = REMINDER_TAG,
    params(
        ("id" = i32, Path, description = "Reminder ID")
    ),
    request_body = UpdateReminderDto,
    responses(
        (status = 200, description = "Successfully updated reminder", body = ReminderDto),
        (status = 400, description = "Reminder text is blank", body = ErrorDto),
        (status = 404, description = "Reminder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let reminder = ReminderService::new(&state.db)
        .update(id, UpdateReminderParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(reminder.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/reminders/{id}",
    tag = REMINDER_TAG,
    params(
        ("id" = i32, Path, description = "Reminder ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted reminder"),
        (status = 404, description = "Reminder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReminderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
