use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::not_blank;

/// Public view of a registered user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Sign-up request body.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct SignUpDto {
    #[validate(
        custom(function = "not_blank", message = "Username is required"),
        length(max = 10, message = "Username must be at most 10 characters")
    )]
    pub username: String,
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email address is not valid")
    )]
    pub email: String,
    #[validate(
        custom(function = "not_blank", message = "Password is required"),
        length(
            min = 8,
            max = 20,
            message = "Password must be between 8 and 20 characters"
        )
    )]
    pub password: String,
}

/// Login request body.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}
