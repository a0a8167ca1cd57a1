//! REST routes for the game collection.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    dto::game::{GameInput, GameListQuery, GameResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes handling the game collection CRUD operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/export", get(export_games))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/games/{id}/favorite", post(toggle_favorite))
}

/// List the collection, optionally filtered, newest first.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    params(GameListQuery),
    responses(
        (status = 200, description = "Matching games, newest first", body = [GameResponse])
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
    Query(query): Query<GameListQuery>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = game_service::list_games(&state, query).await?;
    Ok(Json(games))
}

/// Create a new game record.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = GameInput,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 400, description = "Validation errors")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<GameInput>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    let game = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Export the whole collection as a downloadable JSON document.
#[utoipa::path(
    get,
    path = "/games/export",
    tag = "games",
    responses(
        (status = 200, description = "Every game record, with a download disposition", body = [GameResponse])
    )
)]
pub async fn export_games(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let games = game_service::export_games(&state).await?;
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"games_export.json\"",
        )],
        Json(games),
    ))
}

/// Retrieve a game record by its identifier.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game to retrieve")),
    responses(
        (status = 200, description = "Game record", body = GameResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No matching record")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, AppError> {
    let game = game_service::get_game(&state, &id).await?;
    Ok(Json(game))
}

/// Replace an existing game record.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game to update")),
    request_body = GameInput,
    responses(
        (status = 200, description = "Updated game record", body = GameResponse),
        (status = 400, description = "Malformed identifier or validation errors"),
        (status = 404, description = "No matching record")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<GameInput>,
) -> Result<Json<GameResponse>, AppError> {
    let game = game_service::update_game(&state, &id, payload).await?;
    Ok(Json(game))
}

/// Delete a game record permanently.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No matching record")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip the favorite flag of a game record.
#[utoipa::path(
    post,
    path = "/games/{id}/favorite",
    tag = "games",
    params(("id" = String, Path, description = "Identifier of the game to toggle")),
    responses(
        (status = 200, description = "Game with the favorite flag flipped", body = GameResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No matching record")
    )
)]
pub async fn toggle_favorite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, AppError> {
    let game = game_service::toggle_favorite(&state, &id).await?;
    Ok(Json(game))
}
