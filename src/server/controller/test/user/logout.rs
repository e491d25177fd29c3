use super::*;

/// Tests logging out a logged in user.
///
/// Expected: 200, after which writing requires login again
#[tokio::test]
async fn logs_out() {
    let server = test_server().await;
    sign_up_and_login(&server, "alice", "alice@example.com").await;

    let response = server.post("/api/users/logout").await;

    response.assert_status_ok();
    assert_eq!(response.json::<MessageDto>(), MessageDto::new("Logged out"));

    server
        .post("/api/boards")
        .json(&json!({ "title": "Hello", "content": "World" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// Tests logging out without being logged in.
///
/// Expected: 400, also for a repeated logout
#[tokio::test]
async fn rejects_logout_without_login() {
    let server = test_server().await;

    server
        .post("/api/users/logout")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    sign_up_and_login(&server, "alice", "alice@example.com").await;
    server.post("/api/users/logout").await.assert_status_ok();

    server
        .post("/api/users/logout")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
