use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn param(email: &str) -> SignUpParam {
    SignUpParam {
        username: "alice".to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
    }
}

/// Tests registering a new account.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn registers_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.sign_up(param("alice@example.com")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that an already registered email is rejected.
///
/// Expected: Err(BadRequest) and no second user stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service.sign_up(param("alice@example.com")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
