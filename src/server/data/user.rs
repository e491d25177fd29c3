//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database,
//! converting between entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{SignUpParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Username, email and password of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation on the email column
    pub async fn create(&self, param: SignUpParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email, used to log in.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User registered with that email
    /// - `Ok(None)` - Email is not registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether an email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - A user with that email exists
    /// - `Ok(false)` - Email is available
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user by ID.
    ///
    /// The user's boards must already be deleted, otherwise the foreign key on the
    /// board table rejects the delete.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the user did not exist)
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn delete(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
