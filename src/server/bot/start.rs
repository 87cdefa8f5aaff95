use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    bot::{
        client::{TelegramClient, POLL_TIMEOUT_SECS},
        handler::Handler,
    },
    config::BotConfig,
    error::{bot::BotError, AppError},
    scheduler::reminders::start_scheduler,
};

/// Delay before polling again after a failed `getUpdates` call.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Runs the bot until the process exits, logging instead of returning any error.
///
/// Intended to be passed to `tokio::spawn` during server startup.
pub async fn run(config: BotConfig, db: DatabaseConnection) {
    tracing::info!("Starting Telegram bot...");

    if let Err(e) = start_bot(&config, db).await {
        tracing::error!("Telegram bot stopped: {}", e);
    }
}

/// Creates the API client and verifies the token with `getMe`.
///
/// # Returns
/// - `Ok(TelegramClient)` - Client for the configured bot
/// - `Err(BotError::MissingToken)` - `TELEGRAM_BOT_TOKEN` is not set
/// - `Err(BotError)` - Telegram rejected the token or could not be reached
pub async fn init_bot(config: &BotConfig) -> Result<TelegramClient, BotError> {
    let token = config.token.as_deref().ok_or(BotError::MissingToken)?;
    let client = TelegramClient::new(&config.api_url, token)?;

    let me = client.get_me().await?;
    tracing::info!(
        "{} is connected to Telegram!",
        me.username.as_deref().unwrap_or(&me.first_name)
    );

    Ok(client)
}

/// Starts the bot in a blocking manner
///
/// Initializes the client, starts the reminder scheduler and then long-polls for
/// updates forever. Polling errors are logged and retried after a short delay; only
/// startup failures are returned.
pub async fn start_bot(config: &BotConfig, db: DatabaseConnection) -> Result<(), AppError> {
    let client = init_bot(config).await?;

    start_scheduler(db.clone(), client.clone()).await?;

    let handler = Handler::new(db, config.utc_offset);
    let mut offset: Option<i64> = None;

    loop {
        match poll_once(&client, &handler, offset).await {
            Ok(next) => offset = next,
            Err(e) => {
                tracing::warn!("Failed to poll Telegram updates: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

/// Fetches one batch of updates starting at `offset` and replies to each.
///
/// # Returns
/// - `Ok(Option<i64>)` - Offset for the next poll: last update id + 1, or `offset`
///   unchanged when nothing arrived
/// - `Err(BotError)` - `getUpdates` failed; the caller retries with the same offset
pub async fn poll_once(
    client: &TelegramClient,
    handler: &Handler,
    offset: Option<i64>,
) -> Result<Option<i64>, BotError> {
    let updates = client.get_updates(offset, POLL_TIMEOUT_SECS).await?;
    let mut next_offset = offset;

    for update in updates {
        // Acknowledge before handling so a failing update is not redelivered forever
        next_offset = Some(update.update_id + 1);

        let Some(reply) = handler.handle_update(update).await else {
            continue;
        };

        if let Err(e) = client.send_message(reply.chat_id, &reply.text).await {
            tracing::error!("Failed to reply to chat {}: {}", reply.chat_id, e);
        }
    }

    Ok(next_offset)
}
