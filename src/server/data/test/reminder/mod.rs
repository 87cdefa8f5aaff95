use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::Recurrence as RecurrenceEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::reminder::ReminderRepository,
    model::reminder::{CreateReminderParam, Recurrence, UpdateReminderParam},
};

mod create;
mod delete;
mod get_all;
mod get_due;
mod record_delivery;
mod update;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}
