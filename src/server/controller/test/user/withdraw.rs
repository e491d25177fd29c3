use super::*;

/// Tests withdrawing an account that owns boards.
///
/// Verifies the user's boards disappear, other boards remain and the old
/// credentials no longer log in.
///
/// Expected: 200
#[tokio::test]
async fn withdraws_account_and_boards() {
    let server = test_server().await;

    sign_up_and_login(&server, "bob", "bob@example.com").await;
    server
        .post("/api/boards")
        .json(&json!({ "title": "Bob's", "content": "stays" }))
        .await
        .assert_status(StatusCode::CREATED);

    sign_up_and_login(&server, "alice", "alice@example.com").await;
    for title in ["one", "two"] {
        server
            .post("/api/boards")
            .json(&json!({ "title": title, "content": "gone soon" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.delete("/api/users/withdraw").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<MessageDto>(),
        MessageDto::new("Account deleted")
    );

    let boards = server.get("/api/boards").await.json::<Vec<BoardDto>>();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].writer, "bob");

    server
        .post("/api/users/sessions")
        .json(&json!({ "email": "alice@example.com", "password": PASSWORD }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// Tests that the session is gone after withdrawing.
///
/// Expected: 401 for a second withdraw
#[tokio::test]
async fn ends_session() {
    let server = test_server().await;
    sign_up_and_login(&server, "alice", "alice@example.com").await;

    server.delete("/api/users/withdraw").await.assert_status_ok();

    server
        .delete("/api/users/withdraw")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// Tests withdrawing without being logged in.
///
/// Expected: 401
#[tokio::test]
async fn requires_login() {
    let server = test_server().await;
    sign_up(&server, "alice", "alice@example.com").await;

    server
        .delete("/api/users/withdraw")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    login(&server, "alice@example.com").await;
    server.delete("/api/users/withdraw").await.assert_status_ok();
}
