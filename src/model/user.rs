use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
}
