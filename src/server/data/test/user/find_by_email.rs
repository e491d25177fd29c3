use super::*;

/// Tests finding a user by their registered email.
///
/// Verifies the lookup matches on email only when several users exist.
///
/// Expected: Ok(Some) with the user owning that email
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .email("target@example.com")
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("target@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, target.id);

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
