//! Board domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::board::{BoardDto, BoardRequestDto, BoardSearchQuery},
    server::error::AppError,
};

/// A board together with the username of its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Unique identifier of the board.
    pub id: i32,
    /// Board title.
    pub title: String,
    /// Board body text.
    pub content: String,
    /// ID of the owning user.
    pub user_id: i32,
    /// Username of the owning user.
    pub writer: String,
}

impl Board {
    /// Converts the board domain model to a DTO for API responses.
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            title: self.title,
            content: self.content,
            writer: self.writer,
        }
    }

    /// Converts a board entity and its owner entity into a board domain model.
    ///
    /// Boards are always loaded together with their owner; a missing owner means the
    /// row violates referential integrity.
    ///
    /// # Returns
    /// - `Ok(Board)` - The converted board
    /// - `Err(DbErr::RecordNotFound)` - The board's owner was not loaded
    pub fn from_entity(
        board: entity::board::Model,
        owner: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let owner = owner.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Owner {} of board {} not found",
                board.user_id, board.id
            ))
        })?;

        Ok(Self {
            id: board.id,
            title: board.title,
            content: board.content,
            user_id: board.user_id,
            writer: owner.username,
        })
    }

    /// Whether the given user owns this board.
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

/// Parameters for creating a board.
#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    /// ID of the user writing the board.
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl CreateBoardParams {
    /// Converts a validated board request into creation parameters.
    pub fn from_dto(user_id: i32, dto: BoardRequestDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            content: dto.content,
        }
    }
}

/// Parameters for editing a board.
#[derive(Debug, Clone)]
pub struct UpdateBoardParams {
    /// ID of the board to edit.
    pub id: i32,
    /// ID of the user requesting the edit.
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl UpdateBoardParams {
    /// Converts a validated board request into update parameters.
    pub fn from_dto(id: i32, user_id: i32, dto: BoardRequestDto) -> Self {
        Self {
            id,
            user_id,
            title: dto.title,
            content: dto.content,
        }
    }
}

/// Filter applied when listing boards.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardFilter {
    /// Every board.
    All,
    /// Boards whose title contains the term.
    Title(String),
    /// Boards whose writer's username contains the term.
    Writer(String),
}

impl BoardFilter {
    /// Builds the filter from list query parameters.
    ///
    /// Blank terms count as absent.
    ///
    /// # Returns
    /// - `Ok(BoardFilter)` - At most one search term was given
    /// - `Err(AppError::BadRequest)` - Both `title` and `writer` were given
    pub fn from_query(query: BoardSearchQuery) -> Result<Self, AppError> {
        let title = query.title.filter(|t| !t.trim().is_empty());
        let writer = query.writer.filter(|w| !w.trim().is_empty());

        match (title, writer) {
            (None, None) => Ok(Self::All),
            (Some(title), None) => Ok(Self::Title(title)),
            (None, Some(writer)) => Ok(Self::Writer(writer)),
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "Search by either title or writer, not both".to_string(),
            )),
        }
    }
}
