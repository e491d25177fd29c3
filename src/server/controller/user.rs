use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, SignUpDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession, validation::ValidatedJson},
        model::user::{LoginParam, SignUpParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email and password of the new account
///
/// # Returns
/// - `201 Created` - Account registered
/// - `400 Bad Request` - Invalid fields or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 400, description = "Invalid fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .sign_up(SignUpParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Stores the user's ID in a freshly issued session.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session receiving the logged in user
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Logged in, session cookie set
/// - `400 Bad Request` - Blank email or password
/// - `401 Unauthorized` - Email or password does not match
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/users/sessions",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 400, description = "Blank email or password", body = ErrorDto),
        (status = 401, description = "Email or password does not match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(LoginParam::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
///
/// # Returns
/// - `200 OK` - Session removed
/// - `400 Bad Request` - No user is logged in on this session
/// - `500 Internal Server Error` - Session error
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 400, description = "Already logged out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(user_id) = auth_session.get_user_id().await? else {
        return Err(AuthError::AlreadyLoggedOut.into());
    };

    auth_session.clear().await?;

    tracing::info!("User {} logged out", user_id);

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Delete the logged in user's account and all of their boards.
///
/// # Access Control
/// - Logged in user; the account deleted is always the caller's own
///
/// # Returns
/// - `200 OK` - Account deleted and session removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Account no longer exists
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    delete,
    path = "/api/users/withdraw",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully withdrew", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    UserService::new(&state.db).withdraw(user.id).await?;

    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Account deleted"))))
}
