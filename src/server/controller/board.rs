use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDto, BoardRequestDto, BoardSearchQuery},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validation::ValidatedJson},
        model::board::{BoardFilter, CreateBoardParams, UpdateBoardParams},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Write a new board as the logged in user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Title and content
///
/// # Returns
/// - `201 Created` - Board created
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = BOARD_TAG,
    request_body = BoardRequestDto,
    responses(
        (status = 201, description = "Successfully created board", body = BoardDto),
        (status = 400, description = "Blank title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<BoardRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let board = BoardService::new(&state.db)
        .write(CreateBoardParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// List boards, newest first.
///
/// Optionally narrowed by a substring of the title or of the writer's username.
///
/// # Returns
/// - `200 OK` - Matching boards
/// - `400 Bad Request` - Both `title` and `writer` given
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = BOARD_TAG,
    params(BoardSearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved boards", body = Vec<BoardDto>),
        (status = 400, description = "Both title and writer given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards(
    State(state): State<AppState>,
    Query(query): Query<BoardSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BoardFilter::from_query(query)?;

    let boards = BoardService::new(&state.db).get_boards(filter).await?;
    let dtos: Vec<BoardDto> = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single board.
///
/// # Returns
/// - `200 OK` - Board found
/// - `404 Not Found` - No board with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let board = BoardService::new(&state.db).get_board(board_id).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Replace the title and content of a board.
///
/// # Access Control
/// - Only the board's writer
///
/// # Returns
/// - `200 OK` - Board updated
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not the writer
/// - `404 Not Found` - No board with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = BoardRequestDto,
    responses(
        (status = 200, description = "Successfully updated board", body = BoardDto),
        (status = 400, description = "Blank title or content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<BoardRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let board = BoardService::new(&state.db)
        .edit(UpdateBoardParams::from_dto(board_id, user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Delete a board.
///
/// # Access Control
/// - Only the board's writer
///
/// # Returns
/// - `204 No Content` - Board deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not the writer
/// - `404 Not Found` - No board with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted board"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    BoardService::new(&state.db).delete(board_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
