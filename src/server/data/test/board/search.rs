use super::*;

/// Tests searching boards by a substring of their title.
///
/// Expected: Ok with only matching boards, newest first
#[tokio::test]
async fn searches_by_title_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = factory::board::BoardFactory::new(db, user.id)
        .title("Rust tips")
        .build()
        .await?;
    factory::board::BoardFactory::new(db, user.id)
        .title("Cooking")
        .build()
        .await?;
    let newer = factory::board::BoardFactory::new(db, user.id)
        .title("More Rust")
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let boards = repo.search_by_title("Rust").await?;

    let ids: Vec<i32> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests searching boards by a substring of the writer's username.
///
/// Expected: Ok with only boards owned by matching users
#[tokio::test]
async fn searches_by_writer_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;
    let alice_board = factory::board::create_board(db, alice.id).await?;
    factory::board::create_board(db, bob.id).await?;

    let repo = BoardRepository::new(db);
    let boards = repo.search_by_writer("lic").await?;

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].id, alice_board.id);
    assert_eq!(boards[0].writer, "alice");

    Ok(())
}

/// Tests a search term that matches nothing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_board_with_user(db).await?;

    let repo = BoardRepository::new(db);

    assert!(repo.search_by_title("no such title").await?.is_empty());
    assert!(repo.search_by_writer("nobody").await?.is_empty());

    Ok(())
}

/// Tests that `%` and `_` in a search term match only themselves.
///
/// Expected: Ok with only boards containing the literal characters
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("snake_case")
        .build()
        .await?;
    let other = factory::user::UserFactory::new(db)
        .username("plain")
        .build()
        .await?;
    factory::board::BoardFactory::new(db, other.id)
        .title("Hello")
        .build()
        .await?;
    let percent = factory::board::BoardFactory::new(db, user.id)
        .title("100% sure")
        .build()
        .await?;

    let repo = BoardRepository::new(db);

    let ids = |boards: Vec<crate::server::model::board::Board>| {
        boards.iter().map(|b| b.id).collect::<Vec<i32>>()
    };
    assert_eq!(ids(repo.search_by_title("%").await?), vec![percent.id]);
    assert_eq!(ids(repo.search_by_title("100%").await?), vec![percent.id]);
    assert!(repo.search_by_title("_").await?.is_empty());
    assert!(repo.search_by_title("0_").await?.is_empty());
    assert_eq!(ids(repo.search_by_writer("_").await?), vec![percent.id]);

    Ok(())
}

/// Tests that searching ignores ASCII case.
///
/// Expected: Ok with the board regardless of the term's case
#[tokio::test]
async fn ignores_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("Alice")
        .build()
        .await?;
    let board = factory::board::BoardFactory::new(db, user.id)
        .title("Rust Tips")
        .build()
        .await?;

    let repo = BoardRepository::new(db);

    assert_eq!(repo.search_by_title("rust tips").await?[0].id, board.id);
    assert_eq!(repo.search_by_writer("ALICE").await?[0].id, board.id);

    Ok(())
}
