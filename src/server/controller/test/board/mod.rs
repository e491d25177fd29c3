use axum::http::StatusCode;
use serde_json::json;

use super::{sign_up_and_login, test_server};
use crate::model::{api::ErrorDto, board::BoardDto};


/// Writes a board as whoever is logged in on `server`.
async fn write_board(server: &axum_test::TestServer, title: &str) -> BoardDto {
    let response = server
        .post("/api/boards")
        .json(&json!({ "title": title, "content": format!("{} content", title) }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<BoardDto>()
}
