mod model;
mod server;

use crate::server::{bot, config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    config.warn_on_default_secret();

    startup::prepare_database_dir(&config)?;
    let db = startup::connect_to_database(&config).await?;

    // Bot failures are logged inside the task and never stop the web server
    let bot_db = db.clone();
    let bot_config = config.bot.clone();
    tokio::spawn(async move {
        bot::start::run(bot_config, bot_db).await;
    });

    let app = router::router(&config.static_dir).with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Starting web interface on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
