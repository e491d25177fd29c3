use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request requires a logged in user. Results in 401 Unauthorized.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when a user was deleted while another session of theirs was still
    /// alive. Results in 401 Unauthorized.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so the response does not reveal which emails
    /// are registered. Results in 401 Unauthorized.
    #[error("Invalid login credentials for email '{0}'")]
    InvalidCredentials(String),

    /// A user tried to modify a board owned by someone else.
    ///
    /// Results in 403 Forbidden.
    #[error("User {user_id} is not the owner of board {board_id}")]
    NotBoardOwner {
        /// ID of the requesting user
        user_id: i32,
        /// ID of the board being modified
        board_id: i32,
    },

    /// Logout requested without an authenticated session.
    ///
    /// Covers repeated logout requests and logout calls made without logging in.
    /// Results in 400 Bad Request.
    #[error("Logout requested without an authenticated session")]
    AlreadyLoggedOut,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Login required"
/// - `InvalidCredentials` → 401 Unauthorized with a message not revealing which field was wrong
/// - `NotBoardOwner` → 403 Forbidden
/// - `AlreadyLoggedOut` → 400 Bad Request
///
/// All errors are logged at debug level with their full details while the client-facing
/// messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Login required")
            }
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Email or password does not match")
            }
            Self::NotBoardOwner { .. } => (
                StatusCode::FORBIDDEN,
                "Only the writer can modify this board",
            ),
            Self::AlreadyLoggedOut => (
                StatusCode::BAD_REQUEST,
                "Already logged out or the request is not valid",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
