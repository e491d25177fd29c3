use super::*;

/// Tests fetching a single board.
///
/// Expected: Ok for an existing board, Err(NotFound) otherwise
#[tokio::test]
async fn gets_board_or_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, created) = factory::helpers::create_board_with_user(db).await?;

    let service = BoardService::new(db);
    let board = service.get_board(created.id).await?;
    let missing = service.get_board(created.id + 1).await;

    assert_eq!(board.id, created.id);
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that each filter dispatches to the matching query.
///
/// Expected: All returns everything newest first, Title and Writer narrow the list
#[tokio::test]
async fn lists_boards_by_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;
    let rust = factory::board::BoardFactory::new(db, alice.id)
        .title("Learning Rust")
        .build()
        .await?;
    let cooking = factory::board::BoardFactory::new(db, bob.id)
        .title("Cooking")
        .build()
        .await?;

    let service = BoardService::new(db);

    let all = service.get_boards(BoardFilter::All).await?;
    let by_title = service
        .get_boards(BoardFilter::Title("Rust".to_string()))
        .await?;
    let by_writer = service
        .get_boards(BoardFilter::Writer("bob".to_string()))
        .await?;

    assert_eq!(
        all.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![cooking.id, rust.id]
    );
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, rust.id);
    assert_eq!(by_writer.len(), 1);
    assert_eq!(by_writer[0].id, cooking.id);

    Ok(())
}
