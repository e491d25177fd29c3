use super::*;

/// Tests fetching an existing board.
///
/// Expected: Ok(Some) with the board and its writer
#[tokio::test]
async fn returns_board_with_writer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, created) = factory::helpers::create_board_with_user(db).await?;

    let repo = BoardRepository::new(db);
    let board = repo.get_by_id(created.id).await?;

    assert!(board.is_some());
    let board = board.unwrap();
    assert_eq!(board.id, created.id);
    assert_eq!(board.title, created.title);
    assert_eq!(board.content, created.content);
    assert_eq!(board.writer, user.username);

    Ok(())
}

/// Tests fetching a board that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let board = repo.get_by_id(1).await?;

    assert!(board.is_none());

    Ok(())
}
