//! User domain models and parameters.

use crate::model::user::{LoginDto, SignUpDto, UserDto};

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Display name shown as the writer of the user's boards.
    pub username: String,
    /// Unique login email.
    pub email: String,
    /// Login password as submitted at sign up.
    pub password: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password is dropped.
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
            password: entity.password,
        }
    }

    /// Compares a submitted password against the stored one.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct SignUpParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpParam {
    /// Converts a validated sign-up request into service parameters.
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for logging in with email and password.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
