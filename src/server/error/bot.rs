use thiserror::Error;

/// Failures talking to the Telegram Bot API.
#[derive(Error, Debug)]
pub enum BotError {
    /// No bot token configured.
    ///
    /// The bot is skipped; the web interface keeps running without it.
    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,

    /// Transport or decoding failure in the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Telegram answered with `ok: false`.
    #[error("Telegram API call {method} failed: {description}")]
    Api {
        /// Bot API method name, e.g. `sendMessage`
        method: String,
        /// Error description returned by Telegram
        description: String,
    },
}
