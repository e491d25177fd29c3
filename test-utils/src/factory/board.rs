//! Board factory for creating test board entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test boards with customizable fields.
///
/// The owning user must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::board::BoardFactory;
///
/// let board = BoardFactory::new(&db, user.id)
///     .title("Hello")
///     .build()
///     .await?;
/// ```
pub struct BoardFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    user_id: i32,
    title: String,
    content: String,
}

impl<'a, C: ConnectionTrait> BoardFactory<'a, C> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Board {id}"` where id is auto-incremented
    /// - content: `"Content of board {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    pub fn new(db: &'a C, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Board {}", id),
            content: format!("Content of board {}", id),
        }
    }

    /// Sets the title for the board.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the content for the board.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the board entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values for the given owner.
///
/// Shorthand for `BoardFactory::new(db, user_id).build().await`.
pub async fn create_board<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, user_id).build().await
}
