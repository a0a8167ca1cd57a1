use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Ludotheque Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::list_games,
        crate::routes::game::create_game,
        crate::routes::game::export_games,
        crate::routes::game::get_game,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
        crate::routes::game::toggle_favorite,
        crate::routes::stats::collection_stats,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GameInput,
            crate::dto::game::GameResponse,
            crate::dto::stats::StatsResponse,
        )
    ),
    tags(
        (name = "games", description = "Game collection CRUD endpoints"),
        (name = "stats", description = "Collection-wide statistics"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
