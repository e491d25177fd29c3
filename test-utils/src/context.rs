use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity window used when a test does not choose one; matches the server default.
pub const DEFAULT_SESSION_INACTIVITY: Duration = Duration::days(7);

/// In-memory database and login session for one test.
///
/// Both are created lazily. The session lives in the same SQLite database as the
/// application tables, the way the server shares one pool between them.
pub struct TestContext {
    /// In-memory SQLite connection, `None` until first use.
    pub db: Option<DatabaseConnection>,

    /// Session stored in `db`, `None` until first use.
    pub session: Option<Session>,

    session_inactivity: Duration,
}

impl TestContext {
    /// Creates a context whose sessions expire after the default inactivity window.
    pub fn new() -> Self {
        Self::with_session_inactivity(DEFAULT_SESSION_INACTIVITY)
    }

    /// Creates a context whose sessions expire after `inactivity`.
    pub fn with_session_inactivity(inactivity: Duration) -> Self {
        Self {
            db: None,
            session: None,
            session_inactivity: inactivity,
        }
    }

    /// Gets or creates the in-memory SQLite connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The connection
    /// - `Err(TestError::Database)` - Failed to open the database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes CREATE TABLE statements in order. Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the session.
    ///
    /// The first call creates the session table and an empty session with
    /// inactivity expiry. Later calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The session
    /// - `Err(TestError::Database)` - Failed to open the database
    /// - `Err(TestError::SessionStore)` - Failed to create the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let store = self.session_store().await?;
                let session = Session::new(
                    None,
                    Arc::new(store),
                    Some(Expiry::OnInactivity(self.session_inactivity)),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets or creates both the connection and the session.
    ///
    /// Needed because `database()` and `session()` each borrow `self` mutably.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("session() initializes the database and the session"),
        }
    }

    async fn session_store(&mut self) -> Result<SqliteStore, TestError> {
        let pool = self.database().await?.get_sqlite_connection_pool().clone();

        let store = SqliteStore::new(pool);
        store.migrate().await?;

        Ok(store)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
