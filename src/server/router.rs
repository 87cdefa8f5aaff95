use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        chat::get_chats,
        meta::{api_not_found, health, openapi},
        reminder::{create_reminder, delete_reminder, get_reminder, get_reminders, update_reminder},
        user::{create_user, delete_user, get_user, get_users, update_user},
    },
    state::AppState,
};

/// OpenAPI document for the `/api` routes, served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "reminderboard", description = "Family reminder bot backend"),
    paths(
        crate::server::controller::user::get_users,
        crate::server::controller::user::create_user,
        crate::server::controller::user::get_user,
        crate::server::controller::user::update_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::chat::get_chats,
        crate::server::controller::reminder::get_reminders,
        crate::server::controller::reminder::create_reminder,
        crate::server::controller::reminder::get_reminder,
        crate::server::controller::reminder::update_reminder,
        crate::server::controller::reminder::delete_reminder,
        crate::server::controller::meta::health,
    ),
    tags(
        (name = "user", description = "Web app users"),
        (name = "chat", description = "Telegram chats registered with the bot"),
        (name = "reminder", description = "Reminders delivered by the bot"),
        (name = "meta", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// `/api/*` goes to the JSON API with permissive CORS. Every other path serves the file
/// of that name from `static_dir`, or `index.html` when no such file exists so the
/// single-page app can handle its own routes.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/chats", get(get_chats))
        .route("/reminders", get(get_reminders).post(create_reminder))
        .route(
            "/reminders/{id}",
            get(get_reminder)
                .put(update_reminder)
                .delete(delete_reminder),
        )
        .route("/health", get(health))
        .route("/openapi.json", get(openapi))
        .fallback(api_not_found)
        .layer(cors);

    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}
