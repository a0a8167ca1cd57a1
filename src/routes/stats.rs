//! Route exposing collection-wide statistics.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::StatsResponse, error::AppError, services::stats_service, state::SharedState,
};

/// Aggregate statistics over the whole collection.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses((status = 200, description = "Collection statistics", body = StatsResponse))
)]
pub async fn collection_stats(
    State(state): State<SharedState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = stats_service::collection_stats(&state).await?;
    Ok(Json(stats))
}

/// Configure the stats routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/stats", get(collection_stats))
}
