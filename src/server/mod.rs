//! Server-side API backend, chat bot and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and a
//! small reqwest-based client for the Telegram Bot API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers, the bot and data
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Logging, database directory and connection setup
//! - **Router** (`router`) - `/api` routes, CORS and the single-page app fallback
//! - **Scheduler** (`scheduler/`) - Cron job delivering due reminders
//! - **Bot** (`bot/`) - Telegram client, command parsing and update handling

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
