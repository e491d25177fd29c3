//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let board = factory::board::create_board(&db, user.id).await?;
//!
//! let (user, board) = factory::helpers::create_board_with_user(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .email("alice@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod board;
pub mod helpers;
pub mod user;

pub use board::create_board;
pub use user::create_user;
