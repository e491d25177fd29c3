use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::validation::not_blank;

/// A board as shown to clients, with the owner's username as `writer`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BoardDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub writer: String,
}

/// Request body for creating or editing a board.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct BoardRequestDto {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,
}

/// Optional filters for the board list. At most one may be given.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardSearchQuery {
    /// Substring to match against board titles.
    pub title: Option<String>,
    /// Substring to match against the writer's username.
    pub writer: Option<String>,
}
