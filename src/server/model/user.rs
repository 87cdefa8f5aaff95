//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Web application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
        }
    }
}

/// Parameters for a partial user update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
        }
    }
}
