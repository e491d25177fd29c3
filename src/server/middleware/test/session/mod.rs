use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests storing and reading the logged in user's ID.
///
/// Expected: ID readable after login
#[tokio::test]
async fn stores_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(5).await?;

    assert_eq!(auth_session.get_user_id().await?, Some(5));

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: No user ID after clear
#[tokio::test]
async fn clear_removes_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(5).await?;

    auth_session.clear().await?;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
