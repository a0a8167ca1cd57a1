//! Aggregate figures computed over the entire collection.

use crate::{
    dao::models::GameFilter, dto::stats::StatsResponse, error::ServiceError, state::SharedState,
};

/// Compute collection-wide statistics.
///
/// Missing play times and scores count as zero. The Metacritic mean divides
/// by the total record count, not the count of scored games, and is rounded
/// to one decimal place; an empty collection yields all zeros.
pub async fn collection_stats(state: &SharedState) -> Result<StatsResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let games = store.list_games(GameFilter::default()).await?;

    let total_games = games.len() as u64;
    let total_play_time: f64 = games.iter().map(|game| game.temps_jeu_heures).sum();
    let completed_games = games.iter().filter(|game| game.termine).count() as u64;

    let avg_metacritic = if games.is_empty() {
        0.0
    } else {
        let sum: i64 = games
            .iter()
            .map(|game| i64::from(game.metacritic_score.unwrap_or(0)))
            .sum();
        round_one_decimal(sum as f64 / total_games as f64)
    };

    Ok(StatsResponse {
        total_games,
        total_play_time,
        completed_games,
        avg_metacritic,
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dao::game_store::memory::MemoryGameStore,
        dto::game::GameInput,
        services::game_service::create_game,
        state::{AppState, SharedState},
    };

    async fn state_with_store() -> SharedState {
        let state = AppState::new();
        state
            .install_game_store(Arc::new(MemoryGameStore::new()))
            .await;
        state
    }

    fn game(titre: &str, score: Option<i32>, hours: Option<f64>, termine: bool) -> GameInput {
        GameInput {
            titre: Some(titre.into()),
            genre: Some(vec!["Action".into()]),
            plateforme: Some(vec!["PC".into()]),
            metacritic_score: score,
            temps_jeu_heures: hours,
            termine: Some(termine),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_collection_yields_all_zeros() {
        let state = state_with_store().await;
        let stats = collection_stats(&state).await.unwrap();

        assert_eq!(
            stats,
            StatsResponse {
                total_games: 0,
                total_play_time: 0.0,
                completed_games: 0,
                avg_metacritic: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn mean_is_rounded_to_one_decimal() {
        let state = state_with_store().await;
        create_game(&state, game("Hades", Some(80), Some(40.0), true))
            .await
            .unwrap();
        create_game(&state, game("Celeste", Some(90), Some(12.5), false))
            .await
            .unwrap();

        let stats = collection_stats(&state).await.unwrap();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.total_play_time, 52.5);
        assert_eq!(stats.completed_games, 1);
        assert_eq!(stats.avg_metacritic, 85.0);
    }

    #[tokio::test]
    async fn missing_scores_count_as_zero_in_the_mean() {
        let state = state_with_store().await;
        create_game(&state, game("Hades", Some(80), None, false))
            .await
            .unwrap();
        create_game(&state, game("Prototype", None, None, false))
            .await
            .unwrap();

        let stats = collection_stats(&state).await.unwrap();
        assert_eq!(stats.avg_metacritic, 40.0);
        assert_eq!(stats.total_play_time, 0.0);
    }

    #[tokio::test]
    async fn uneven_mean_keeps_one_decimal() {
        let state = state_with_store().await;
        for (titre, score) in [("A", 70), ("B", 75), ("C", 81)] {
            create_game(&state, game(titre, Some(score), None, false))
                .await
                .unwrap();
        }

        let stats = collection_stats(&state).await.unwrap();
        // 226 / 3 = 75.333... -> 75.3
        assert_eq!(stats.avg_metacritic, 75.3);
    }
}
