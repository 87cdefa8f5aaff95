//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic.

pub mod chat;
pub mod reminder;
pub mod user;

#[cfg(test)]
mod test;
