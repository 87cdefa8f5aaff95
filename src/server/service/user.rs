//! User service for business logic.
//!
//! Validates user input and translates unique constraint violations into client
//! errors before delegating to the repository.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Creates a user after trimming and validating the input.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank username, invalid email, or username/email taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let param = CreateUserParam {
            username: validate_username(&param.username)?,
            email: validate_email(&param.email)?,
        };

        UserRepository::new(self.db)
            .create(param)
            .await
            .map_err(map_unique_violation)
    }

    /// Applies a partial update after validating the provided fields.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Invalid field or username/email taken
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let param = UpdateUserParam {
            username: param.username.as_deref().map(validate_username).transpose()?,
            email: param.email.as_deref().map(validate_email).transpose()?,
        };

        UserRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(map_unique_violation)?
            .ok_or_else(user_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).delete(id).await? {
            Ok(())
        } else {
            Err(user_not_found())
        }
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest(
            "Username must not be empty".to_string(),
        ));
    }

    Ok(username.to_string())
}

fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest(
            "Email must be a valid address".to_string(),
        ));
    }

    Ok(email.to_string())
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("Username or email already exists".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
