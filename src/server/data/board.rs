//! Board data repository for database operations.
//!
//! Every read loads the board together with its owning user so the writer's username
//! is available without a second query.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SelectTwo,
};

use crate::server::model::board::{Board, CreateBoardParams, UpdateBoardParams};

/// Repository providing database operations for boards.
pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    /// Creates a new BoardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new board for an existing user.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board with its writer's username
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   user does not exist
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, DbErr> {
        let board = entity::board::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(board.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Board {} not found after creation", board.id))
        })
    }

    /// Gets a board by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - Board found
    /// - `Ok(None)` - No board with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let result = entity::prelude::Board::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result
            .map(|(board, owner)| Board::from_entity(board, owner))
            .transpose()
    }

    /// Gets all boards, newest first.
    pub async fn get_all(&self) -> Result<Vec<Board>, DbErr> {
        let rows = Self::with_writer()
            .order_by_desc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        into_boards(rows)
    }

    /// Gets boards whose title contains `term`, newest first.
    ///
    /// `%` and `_` in `term` match literally. Matching is ASCII case-insensitive.
    pub async fn search_by_title(&self, term: &str) -> Result<Vec<Board>, DbErr> {
        let rows = Self::with_writer()
            .filter(entity::board::Column::Title.like(contains_pattern(term)))
            .order_by_desc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        into_boards(rows)
    }

    /// Gets boards whose writer's username contains `term`, newest first.
    ///
    /// Same matching rules as `search_by_title`.
    pub async fn search_by_writer(&self, term: &str) -> Result<Vec<Board>, DbErr> {
        let rows = Self::with_writer()
            .filter(entity::user::Column::Username.like(contains_pattern(term)))
            .order_by_desc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        into_boards(rows)
    }

    /// Replaces a board's title and content.
    ///
    /// Ownership is not checked here; callers verify it first.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - The updated board
    /// - `Ok(None)` - No board with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Option<Board>, DbErr> {
        let Some(board) = entity::prelude::Board::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board::ActiveModel = board.into();
        active.title = ActiveValue::Set(params.title);
        active.content = ActiveValue::Set(params.content);
        active.update(self.db).await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a board by ID.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the board did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Board::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every board owned by a user.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted boards
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Board::delete_many()
            .filter(entity::board::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn with_writer() -> SelectTwo<entity::board::Entity, entity::user::Entity> {
        entity::prelude::Board::find().find_also_related(entity::prelude::User)
    }
}

/// Builds a LIKE pattern matching `term` anywhere, with its wildcards escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

fn into_boards(
    rows: Vec<(entity::board::Model, Option<entity::user::Model>)>,
) -> Result<Vec<Board>, DbErr> {
    rows.into_iter()
        .map(|(board, owner)| Board::from_entity(board, owner))
        .collect()
}
