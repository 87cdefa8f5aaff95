use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::client::TelegramClient, error::AppError, service::reminder::ReminderService,
};

/// Starts the reminder delivery scheduler
///
/// Runs at the start of every minute and sends every active reminder whose time has
/// come to its chat. A tick that fires while the previous run is still sending is
/// skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `client`: Telegram client used to send the reminders
pub async fn start_scheduler(
    db: DatabaseConnection,
    client: TelegramClient,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let dispatcher = ReminderDispatcher::new(db, client);

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let dispatcher = dispatcher.clone();

        Box::pin(async move {
            if let Err(e) = dispatcher.dispatch(Utc::now()).await {
                tracing::error!("Error processing due reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reminder scheduler started");

    Ok(())
}

/// Delivers due reminders, allowing at most one run at a time.
///
/// Sends can be slow while Telegram is unreachable, so a run may outlast the minute
/// between ticks. Until a reminder is marked delivered it still looks due, and a second
/// concurrent run would send it again.
#[derive(Clone)]
pub struct ReminderDispatcher {
    db: DatabaseConnection,
    client: TelegramClient,
    running: Arc<Mutex<()>>,
}

impl ReminderDispatcher {
    pub fn new(db: DatabaseConnection, client: TelegramClient) -> Self {
        Self {
            db,
            client,
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Processes reminders due at `now` unless another run is in progress.
    ///
    /// # Returns
    /// - `Ok(Some(usize))` - Number of reminders processed
    /// - `Ok(None)` - Skipped, the previous run has not finished
    /// - `Err(AppError)` - Database error
    pub async fn dispatch(&self, now: DateTime<Utc>) -> Result<Option<usize>, AppError> {
        let Ok(_running) = self.running.try_lock() else {
            tracing::warn!("Previous reminder run still in progress, skipping this tick");
            return Ok(None);
        };

        let processed = process_due_reminders(&self.db, &self.client, now).await?;

        Ok(Some(processed))
    }
}

/// Sends every reminder due at `now` and records its delivery.
///
/// A reminder is marked delivered even when sending fails, so a chat that blocked the
/// bot is not retried every minute.
///
/// # Returns
/// - `Ok(usize)` - Number of reminders processed
/// - `Err(AppError)` - Database error
pub async fn process_due_reminders(
    db: &DatabaseConnection,
    client: &TelegramClient,
    now: DateTime<Utc>,
) -> Result<usize, AppError> {
    let service = ReminderService::new(db);
    let due = service.get_due(now).await?;

    if !due.is_empty() {
        tracing::debug!("Found {} due reminders", due.len());
    }

    for reminder in &due {
        let text = format!("⏰ Reminder: {}", reminder.text);

        match client.send_message(reminder.chat_id, &text).await {
            Ok(_) => tracing::info!(
                "Sent reminder {} to chat {}",
                reminder.id,
                reminder.chat_id
            ),
            Err(e) => tracing::error!(
                "Failed to send reminder {} to chat {}: {}",
                reminder.id,
                reminder.chat_id,
                e
            ),
        }

        service.mark_delivered(reminder, now).await?;
    }

    Ok(due.len())
}
