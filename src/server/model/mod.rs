//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and into
//! DTOs at the controller boundary.

pub mod chat;
pub mod reminder;
pub mod user;
