//! Board service for business logic.
//!
//! Reads are open to everyone. Edits and deletes are restricted to the board's owner,
//! which is checked here before the repository is touched.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{board::BoardRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::board::{Board, BoardFilter, CreateBoardParams, UpdateBoardParams},
};

/// Service providing business logic for boards.
pub struct BoardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    /// Creates a new BoardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BoardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a new board for a user.
    ///
    /// # Arguments
    /// - `params` - Owner ID, title and content
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board including writer name
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn write(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(params.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let board = BoardRepository::new(self.db).create(params).await?;

        tracing::info!("User {} wrote board {}", board.user_id, board.id);

        Ok(board)
    }

    /// Gets a single board.
    ///
    /// # Returns
    /// - `Ok(Board)` - Board found
    /// - `Err(AppError::NotFound)` - No board with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_board(&self, board_id: i32) -> Result<Board, AppError> {
        BoardRepository::new(self.db)
            .get_by_id(board_id)
            .await?
            .ok_or_else(|| board_not_found(board_id))
    }

    /// Lists boards matching a filter, newest first.
    pub async fn get_boards(&self, filter: BoardFilter) -> Result<Vec<Board>, AppError> {
        tracing::debug!("Listing boards with {:?}", filter);

        match filter {
            BoardFilter::All => self.get_all_boards().await,
            BoardFilter::Title(term) => self.get_boards_by_title(&term).await,
            BoardFilter::Writer(term) => self.get_boards_by_writer(&term).await,
        }
    }

    /// Lists every board, newest first.
    pub async fn get_all_boards(&self) -> Result<Vec<Board>, AppError> {
        Ok(BoardRepository::new(self.db).get_all().await?)
    }

    /// Lists boards whose title contains `term`, newest first.
    pub async fn get_boards_by_title(&self, term: &str) -> Result<Vec<Board>, AppError> {
        Ok(BoardRepository::new(self.db).search_by_title(term).await?)
    }

    /// Lists boards whose writer's username contains `term`, newest first.
    pub async fn get_boards_by_writer(&self, term: &str) -> Result<Vec<Board>, AppError> {
        Ok(BoardRepository::new(self.db).search_by_writer(term).await?)
    }

    /// Replaces the title and content of a board owned by the requesting user.
    ///
    /// # Arguments
    /// - `params` - Board ID, requesting user ID and the new title and content
    ///
    /// # Returns
    /// - `Ok(Board)` - The updated board
    /// - `Err(AppError::NotFound)` - No board with that ID
    /// - `Err(AppError::AuthErr(NotBoardOwner))` - Requesting user does not own the board
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn edit(&self, params: UpdateBoardParams) -> Result<Board, AppError> {
        let board_repo = BoardRepository::new(self.db);

        let board = self.get_owned_board(params.id, params.user_id).await?;

        let updated = board_repo
            .update(params)
            .await?
            .ok_or_else(|| board_not_found(board.id))?;

        tracing::info!("User {} edited board {}", updated.user_id, updated.id);

        Ok(updated)
    }

    /// Deletes a board owned by the requesting user.
    ///
    /// # Returns
    /// - `Ok(())` - Board deleted
    /// - `Err(AppError::NotFound)` - No board with that ID
    /// - `Err(AppError::AuthErr(NotBoardOwner))` - Requesting user does not own the board
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, board_id: i32, user_id: i32) -> Result<(), AppError> {
        self.get_owned_board(board_id, user_id).await?;

        BoardRepository::new(self.db).delete(board_id).await?;

        tracing::info!("User {} deleted board {}", user_id, board_id);

        Ok(())
    }

    async fn get_owned_board(&self, board_id: i32, user_id: i32) -> Result<Board, AppError> {
        let board = self.get_board(board_id).await?;

        if !board.is_owned_by(user_id) {
            return Err(AuthError::NotBoardOwner { user_id, board_id }.into());
        }

        Ok(board)
    }
}

fn board_not_found(board_id: i32) -> AppError {
    AppError::NotFound(format!("Board {} not found", board_id))
}
