//! Background jobs run with `tokio-cron-scheduler`.

pub mod reminders;
