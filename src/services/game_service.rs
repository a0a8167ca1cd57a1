//! Business logic behind the game collection routes: validation, default
//! mapping, and persistence round-trips.

use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::models::{GameChanges, GameDraft, GameEntity, GameFilter},
    dto::{
        game::{GameInput, GameListQuery, GameResponse},
        validation::validate_game,
    },
    error::ServiceError,
    state::SharedState,
};

/// Validate a candidate payload and persist it as a new record.
///
/// The store assigns the identifier; the returned record is re-read after the
/// write so the caller observes the persisted state.
pub async fn create_game(
    state: &SharedState,
    input: GameInput,
) -> Result<GameResponse, ServiceError> {
    let errors = validate_game(&input, false);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let store = state.require_game_store().await?;
    let draft = build_draft(input, SystemTime::now());
    let entity = store.insert_game(draft).await?;
    Ok(entity.into())
}

/// List records matching the query filters, newest first.
pub async fn list_games(
    state: &SharedState,
    query: GameListQuery,
) -> Result<Vec<GameResponse>, ServiceError> {
    let store = state.require_game_store().await?;
    let filter = GameFilter {
        genre: query.genre,
        plateforme: query.plateforme,
        termine: query.termine,
    };
    let games = store.list_games(filter).await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// Return every record, unfiltered, for the export route.
pub async fn export_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    list_games(state, GameListQuery::default()).await
}

/// Load a single record by its identifier.
pub async fn get_game(state: &SharedState, raw_id: &str) -> Result<GameResponse, ServiceError> {
    let id = parse_game_id(raw_id)?;
    let store = state.require_game_store().await?;
    let Some(entity) = store.find_game(id).await? else {
        return Err(not_found(id));
    };
    Ok(entity.into())
}

/// Replace every mutable field of an existing record.
///
/// Full-replace semantics: the payload is validated like a creation, so the
/// mandatory fields must be present. `favorite` is preserved from the stored
/// record when the payload omits it; `date_ajout` is never touched.
pub async fn update_game(
    state: &SharedState,
    raw_id: &str,
    input: GameInput,
) -> Result<GameResponse, ServiceError> {
    let id = parse_game_id(raw_id)?;
    let store = state.require_game_store().await?;
    let Some(existing) = store.find_game(id).await? else {
        return Err(not_found(id));
    };

    let errors = validate_game(&input, false);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let changes = build_changes(input, &existing, SystemTime::now());
    let Some(entity) = store.update_game(id, changes).await? else {
        return Err(not_found(id));
    };
    Ok(entity.into())
}

/// Remove a record permanently.
pub async fn delete_game(state: &SharedState, raw_id: &str) -> Result<(), ServiceError> {
    let id = parse_game_id(raw_id)?;
    let store = state.require_game_store().await?;
    if !store.delete_game(id).await? {
        return Err(not_found(id));
    }
    Ok(())
}

/// Flip the favorite flag and bump the modification timestamp.
pub async fn toggle_favorite(
    state: &SharedState,
    raw_id: &str,
) -> Result<GameResponse, ServiceError> {
    let id = parse_game_id(raw_id)?;
    let store = state.require_game_store().await?;
    let Some(existing) = store.find_game(id).await? else {
        return Err(not_found(id));
    };

    let Some(entity) = store
        .set_favorite(id, !existing.favorite, SystemTime::now())
        .await?
    else {
        return Err(not_found(id));
    };
    Ok(entity.into())
}

fn parse_game_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::InvalidInput(format!("invalid game id `{raw}`")))
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}

/// Apply the creation defaults to a validated payload.
///
/// Presence is checked explicitly: a field carrying an empty string or a zero
/// is kept as-is, only an absent field receives the default.
fn build_draft(input: GameInput, now: SystemTime) -> GameDraft {
    GameDraft {
        titre: input.titre.unwrap_or_default(),
        genre: input.genre.unwrap_or_default(),
        plateforme: input.plateforme.unwrap_or_default(),
        editeur: input.editeur.unwrap_or_default(),
        developpeur: input.developpeur.unwrap_or_default(),
        annee_sortie: input.annee_sortie,
        metacritic_score: input.metacritic_score,
        temps_jeu_heures: input.temps_jeu_heures.unwrap_or(0.0),
        termine: input.termine.unwrap_or(false),
        favorite: false,
        date_ajout: now,
        date_modification: now,
    }
}

/// Apply the update coercions, preserving `favorite` when the payload omits it.
fn build_changes(input: GameInput, existing: &GameEntity, now: SystemTime) -> GameChanges {
    GameChanges {
        titre: input.titre.unwrap_or_default(),
        genre: input.genre.unwrap_or_default(),
        plateforme: input.plateforme.unwrap_or_default(),
        editeur: input.editeur.unwrap_or_default(),
        developpeur: input.developpeur.unwrap_or_default(),
        annee_sortie: input.annee_sortie,
        metacritic_score: input.metacritic_score,
        temps_jeu_heures: input.temps_jeu_heures.unwrap_or(0.0),
        termine: input.termine.unwrap_or(false),
        favorite: input.favorite.unwrap_or(existing.favorite),
        date_modification: now,
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use time::{OffsetDateTime, format_description::well_known::Rfc3339};
    use tokio::time::sleep;

    use super::*;
    use crate::{dao::game_store::memory::MemoryGameStore, state::AppState};

    async fn state_with_store() -> SharedState {
        let state = AppState::new();
        state
            .install_game_store(Arc::new(MemoryGameStore::new()))
            .await;
        state
    }

    fn hades_input() -> GameInput {
        GameInput {
            titre: Some("Hades".into()),
            genre: Some(vec!["Action".into()]),
            plateforme: Some(vec!["PC".into()]),
            ..Default::default()
        }
    }

    fn parse_timestamp(value: &str) -> OffsetDateTime {
        OffsetDateTime::parse(value, &Rfc3339).unwrap()
    }

    #[tokio::test]
    async fn create_applies_documented_defaults() {
        let state = state_with_store().await;
        let created = create_game(&state, hades_input()).await.unwrap();

        assert_eq!(created.titre, "Hades");
        assert_eq!(created.genre, vec!["Action".to_owned()]);
        assert_eq!(created.plateforme, vec!["PC".to_owned()]);
        assert_eq!(created.editeur, "");
        assert_eq!(created.developpeur, "");
        assert_eq!(created.annee_sortie, None);
        assert_eq!(created.metacritic_score, None);
        assert_eq!(created.temps_jeu_heures, 0.0);
        assert!(!created.termine);
        assert!(!created.favorite);
        assert_eq!(created.date_ajout, created.date_modification);
    }

    #[tokio::test]
    async fn create_keeps_present_zero_values() {
        let state = state_with_store().await;
        let input = GameInput {
            editeur: Some(String::new()),
            temps_jeu_heures: Some(0.0),
            metacritic_score: Some(0),
            ..hades_input()
        };

        let created = create_game(&state, input).await.unwrap();
        assert_eq!(created.metacritic_score, Some(0));
        assert_eq!(created.temps_jeu_heures, 0.0);
    }

    #[tokio::test]
    async fn create_ignores_a_favorite_flag_in_the_payload() {
        let state = state_with_store().await;
        let input = GameInput {
            favorite: Some(true),
            ..hades_input()
        };

        let created = create_game(&state, input).await.unwrap();
        assert!(!created.favorite);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_with_every_violation() {
        let state = state_with_store().await;
        let err = create_game(&state, GameInput::default()).await.unwrap_err();

        match err {
            ServiceError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_preserves_favorite_when_omitted() {
        let state = state_with_store().await;
        let created = create_game(&state, hades_input()).await.unwrap();
        toggle_favorite(&state, &created.id).await.unwrap();

        let updated = update_game(&state, &created.id, hades_input()).await.unwrap();
        assert!(updated.favorite, "omitted favorite must be preserved");

        let input = GameInput {
            favorite: Some(false),
            ..hades_input()
        };
        let overwritten = update_game(&state, &created.id, input).await.unwrap();
        assert!(!overwritten.favorite, "explicit favorite must overwrite");
    }

    #[tokio::test]
    async fn update_replaces_every_mutable_field_but_not_creation_date() {
        let state = state_with_store().await;
        let created = create_game(
            &state,
            GameInput {
                editeur: Some("Supergiant Games".into()),
                annee_sortie: Some(2020),
                ..hades_input()
            },
        )
        .await
        .unwrap();

        sleep(Duration::from_millis(10)).await;
        let updated = update_game(
            &state,
            &created.id,
            GameInput {
                titre: Some("Hades II".into()),
                genre: Some(vec!["Roguelike".into()]),
                plateforme: Some(vec!["PC".into(), "Switch".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.titre, "Hades II");
        // Absent optional fields are reset, not preserved: full-replace semantics.
        assert_eq!(updated.editeur, "");
        assert_eq!(updated.annee_sortie, None);
        assert_eq!(updated.date_ajout, created.date_ajout);
        assert!(parse_timestamp(&updated.date_modification) > parse_timestamp(&created.date_modification));
    }

    #[tokio::test]
    async fn update_requires_the_mandatory_fields() {
        let state = state_with_store().await;
        let created = create_game(&state, hades_input()).await.unwrap();

        let err = update_game(&state, &created.id, GameInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref errors) if errors.len() == 3));
    }

    #[tokio::test]
    async fn toggle_favorite_twice_restores_the_flag_and_bumps_the_timestamp() {
        let state = state_with_store().await;
        let created = create_game(&state, hades_input()).await.unwrap();

        sleep(Duration::from_millis(10)).await;
        let first = toggle_favorite(&state, &created.id).await.unwrap();
        assert!(first.favorite);
        assert!(parse_timestamp(&first.date_modification) > parse_timestamp(&created.date_modification));

        sleep(Duration::from_millis(10)).await;
        let second = toggle_favorite(&state, &created.id).await.unwrap();
        assert!(!second.favorite);
        assert!(parse_timestamp(&second.date_modification) > parse_timestamp(&first.date_modification));
        assert_eq!(second.date_ajout, created.date_ajout);
    }

    #[tokio::test]
    async fn delete_of_a_missing_record_is_not_found_and_changes_nothing() {
        let state = state_with_store().await;
        create_game(&state, hades_input()).await.unwrap();

        let missing = Uuid::new_v4().to_string();
        let err = delete_game(&state, &missing).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let games = list_games(&state, GameListQuery::default()).await.unwrap();
        assert_eq!(games.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let state = state_with_store().await;
        let created = create_game(&state, hades_input()).await.unwrap();

        delete_game(&state, &created.id).await.unwrap();
        let err = get_game(&state, &created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected_before_hitting_the_store() {
        let state = state_with_store().await;

        for raw in ["not-a-uuid", "", "1234"] {
            let err = get_game(&state, raw).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "id `{raw}`");
        }
    }

    #[tokio::test]
    async fn list_filters_and_orders_newest_first() {
        let state = state_with_store().await;

        create_game(
            &state,
            GameInput {
                titre: Some("Celeste".into()),
                genre: Some(vec!["Platformer".into()]),
                plateforme: Some(vec!["Switch".into()]),
                termine: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        sleep(Duration::from_millis(10)).await;
        create_game(&state, hades_input()).await.unwrap();

        let all = list_games(&state, GameListQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].titre, "Hades", "newest record first");

        let platformers = list_games(
            &state,
            GameListQuery {
                genre: Some("Platformer".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(platformers.len(), 1);
        assert_eq!(platformers[0].titre, "Celeste");

        let finished = list_games(
            &state,
            GameListQuery {
                termine: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].titre, "Hades");
    }

    #[tokio::test]
    async fn operations_fail_with_degraded_error_without_a_store() {
        let state = AppState::new();
        let err = create_game(&state, hades_input()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Degraded));
    }
}
