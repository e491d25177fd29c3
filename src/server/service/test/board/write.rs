use super::*;

/// Tests writing a board as an existing user.
///
/// Expected: Ok with board carrying the writer's username
#[tokio::test]
async fn writes_board_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let service = BoardService::new(db);
    let board = service
        .write(CreateBoardParams {
            user_id: user.id,
            title: "Hello".to_string(),
            content: "World".to_string(),
        })
        .await?;

    assert_eq!(board.title, "Hello");
    assert_eq!(board.writer, "alice");
    assert_eq!(board.user_id, user.id);

    Ok(())
}

/// Tests writing a board for a user that no longer exists.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let result = service
        .write(CreateBoardParams {
            user_id: 31,
            title: "Hello".to_string(),
            content: "World".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
