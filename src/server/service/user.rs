//! User service for business logic.
//!
//! This module provides the `UserService` for account registration, credential checks
//! and account removal.

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{board::BoardRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{LoginParam, SignUpParam, User},
};

const DUPLICATE_EMAIL: &str = "Email is already registered";

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Rejects emails that are already registered. A concurrent registration that
    /// slips past the existence check is caught by the unique index and reported the
    /// same way.
    ///
    /// # Arguments
    /// - `param` - Username, email and password of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Email is already registered
    /// - `Err(AppError::DbErr)` - Database error during check or insert
    pub async fn sign_up(&self, param: SignUpParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(&param.email).await? {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }

        let user = user_repo.create(param).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest(DUPLICATE_EMAIL.to_string())
            }
            _ => AppError::from(e),
        })?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Verifies login credentials.
    ///
    /// An unknown email and a wrong password produce the same error.
    ///
    /// # Arguments
    /// - `param` - Email and password supplied by the client
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match this user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_email(&param.email)
            .await?
            .filter(|user| user.password_matches(&param.password))
            .ok_or_else(|| AuthError::InvalidCredentials(param.email.clone()))?;

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Deletes a user and every board they own.
    ///
    /// Boards are deleted before the user inside one transaction, so either both
    /// deletes apply or neither does.
    ///
    /// # Arguments
    /// - `user_id` - ID of the withdrawing user
    ///
    /// # Returns
    /// - `Ok(())` - User and boards deleted
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn withdraw(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let boards_deleted = BoardRepository::new(&txn).delete_by_user(user_id).await?;
        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} withdrew, {} board(s) deleted",
            user_id,
            boards_deleted
        );

        Ok(())
    }
}
