use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, chat::BotChatDto},
    server::{error::AppError, service::chat::BotChatService, state::AppState},
};

pub static CHAT_TAG: &str = "chat";

/// GET /api/chats - Telegram chats registered with the bot, oldest first
#[utoipa::path(
    get,
    path = "/api/chats",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved chats", body = Vec<BotChatDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chats = BotChatService::new(&state.db).get_all().await?;

    let chats_dto: Vec<BotChatDto> = chats.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(chats_dto)))
}
