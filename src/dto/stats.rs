//! Aggregate statistics payload.

use serde::Serialize;
use utoipa::ToSchema;

/// Collection-wide figures returned by the `/stats` route.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of records in the collection.
    pub total_games: u64,
    /// Sum of play time across all games, in hours.
    pub total_play_time: f64,
    /// Number of games flagged as completed.
    pub completed_games: u64,
    /// Mean Metacritic score over all games, rounded to one decimal place.
    pub avg_metacritic: f64,
}
