//! Environment-based application configuration.

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use chrono::{FixedOffset, Offset, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SECRET_KEY: &str = "insecure-development-secret-key";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_DIR: &str = "/var/data/database";
const DATABASE_FILE_NAME: &str = "app.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct Config {
    pub secret_key: String,
    pub port: u16,
    /// Directory holding the SQLite database file, created on startup if missing.
    pub database_dir: PathBuf,
    /// Directory the single-page app is served from.
    pub static_dir: PathBuf,
    pub bot: BotConfig,
}

/// Settings consumed by the chat bot task.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Telegram bot token; `None` makes bot startup fail without affecting the web server.
    pub token: Option<String>,
    pub api_url: String,
    /// Offset used to interpret and display times in chat.
    pub utc_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let utc_offset = match var("REMINDER_UTC_OFFSET_MINUTES") {
            Some(value) => parse_utc_offset(&value)?,
            None => Utc.fix(),
        };

        Ok(Self {
            secret_key: var("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            port,
            database_dir: var("DATABASE_DIR")
                .unwrap_or_else(|| DEFAULT_DATABASE_DIR.to_string())
                .into(),
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            bot: BotConfig {
                token: var("TELEGRAM_BOT_TOKEN"),
                api_url: var("TELEGRAM_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
                utc_offset,
            },
        })
    }

    /// Address the HTTP server listens on; always all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir.join(DATABASE_FILE_NAME)
    }

    /// SQLite connection URL; `mode=rwc` creates the file on first connect.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.database_path().display())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn warn_on_default_secret(&self) {
        if self.uses_default_secret() {
            tracing::warn!("SECRET_KEY not set, falling back to the built-in development key");
        }
    }
}

fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "REMINDER_UTC_OFFSET_MINUTES".to_string(),
        value: value.to_string(),
        reason,
    };

    let minutes = value
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid(e.to_string()))?;

    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| invalid("offset must be within +/- 24 hours".to_string()))
}
