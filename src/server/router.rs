use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, company, game, genre, health, platform, sale, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Catalog API",
        description = "Catalog of video games, the companies that make them, the platforms \
                       and genres they belong to, and their sales."
    ),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "User accounts"),
        (name = "company", description = "Game companies"),
        (name = "platform", description = "Gaming platforms"),
        (name = "genre", description = "Game genres"),
        (name = "game", description = "Games with their platforms and genres"),
        (name = "sale", description = "Sales of a game on a platform"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(user::list_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(
            company::list_companies,
            company::create_company,
            company::delete_companies
        ))
        .routes(routes!(
            company::get_company,
            company::update_company,
            company::delete_company
        ))
        .routes(routes!(
            platform::list_platforms,
            platform::create_platform,
            platform::delete_platforms
        ))
        .routes(routes!(
            platform::get_platform,
            platform::update_platform,
            platform::delete_platform
        ))
        .routes(routes!(
            genre::list_genres,
            genre::create_genre,
            genre::delete_genres
        ))
        .routes(routes!(
            genre::get_genre,
            genre::update_genre,
            genre::delete_genre
        ))
        .routes(routes!(game::list_games, game::create_game, game::delete_games))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(sale::list_sales, sale::create_sale, sale::delete_sales))
        .routes(routes!(sale::get_sale, sale::update_sale, sale::delete_sale))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
