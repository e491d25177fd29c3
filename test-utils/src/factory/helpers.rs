//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one board they own.
///
/// Both entities use default values. Use the individual factories when specific
/// fields matter to the test.
///
/// # Returns
/// - `Ok((user, board))` - The created owner and board
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_user<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::user::Model, entity::board::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db, user.id).await?;

    Ok((user, board))
}
