//! Minimal Telegram Bot API client built on reqwest.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    bot::types::{ApiResponse, BotUser, GetUpdatesParams, Message, SendMessageParams, Update},
    error::bot::BotError,
};

/// Seconds Telegram holds a `getUpdates` request open when there is nothing to deliver.
pub const POLL_TIMEOUT_SECS: u64 = 30;

/// Handle to the Bot API for one bot token.
///
/// Cheap to clone; the underlying reqwest client is reference counted.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    /// `{api_url}/bot{token}`; never logged since it contains the token.
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self, BotError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 15))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    /// Calls a Bot API method with JSON parameters.
    ///
    /// Telegram reports failures with `ok: false` and a description, often together
    /// with a 4xx status, so the body is decoded regardless of status.
    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, BotError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        match response {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse { description, .. } => Err(BotError::Api {
                method: method.to_string(),
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }

    /// Returns the bot's own user; used to validate the token on startup.
    pub async fn get_me(&self) -> Result<BotUser, BotError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-polls for new updates starting at `offset`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, BotError> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message"],
        };

        self.call("getUpdates", &params).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, BotError> {
        self.call("sendMessage", &SendMessageParams { chat_id, text })
            .await
    }
}
