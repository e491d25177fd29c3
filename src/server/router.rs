use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{board, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Board API", description = "Bulletin board with session based accounts"),
    tags(
        (name = "user", description = "Account registration, login and withdrawal"),
        (name = "board", description = "Reading and writing boards")
    )
)]
struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::sign_up))
        .routes(routes!(user::login))
        .routes(routes!(user::logout))
        .routes(routes!(user::withdraw))
        .routes(routes!(board::create_board, board::get_boards))
        .routes(routes!(
            board::get_board,
            board::update_board,
            board::delete_board
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
