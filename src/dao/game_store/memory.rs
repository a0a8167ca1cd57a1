//! In-memory [`GameStore`] backing the service unit tests.

use std::{
    sync::{Arc, Mutex},
    time::SystemTime,
};

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::{
    game_store::GameStore,
    models::{GameChanges, GameDraft, GameEntity, GameFilter},
    storage::StorageResult,
};

/// Test double keeping records in a mutex-guarded vector.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    records: Arc<Mutex<Vec<GameEntity>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(entity: &GameEntity, filter: &GameFilter) -> bool {
    if let Some(genre) = &filter.genre
        && !entity.genre.iter().any(|value| value == genre)
    {
        return false;
    }
    if let Some(plateforme) = &filter.plateforme
        && !entity.plateforme.iter().any(|value| value == plateforme)
    {
        return false;
    }
    if let Some(termine) = filter.termine
        && entity.termine != termine
    {
        return false;
    }
    true
}

impl GameStore for MemoryGameStore {
    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move {
            let entity = GameEntity {
                id: Uuid::new_v4(),
                titre: draft.titre,
                genre: draft.genre,
                plateforme: draft.plateforme,
                editeur: draft.editeur,
                developpeur: draft.developpeur,
                annee_sortie: draft.annee_sortie,
                metacritic_score: draft.metacritic_score,
                temps_jeu_heures: draft.temps_jeu_heures,
                termine: draft.termine,
                favorite: draft.favorite,
                date_ajout: draft.date_ajout,
                date_modification: draft.date_modification,
            };
            store.records.lock().unwrap().push(entity.clone());
            Ok(entity)
        })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let records = store.records.lock().unwrap();
            Ok(records.iter().find(|entity| entity.id == id).cloned())
        })
    }

    fn list_games(
        &self,
        filter: GameFilter,
    ) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let records = store.records.lock().unwrap();
            let mut games: Vec<GameEntity> = records
                .iter()
                .filter(|entity| matches(entity, &filter))
                .cloned()
                .collect();
            games.sort_by(|a, b| b.date_ajout.cmp(&a.date_ajout));
            Ok(games)
        })
    }

    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let mut records = store.records.lock().unwrap();
            let Some(entity) = records.iter_mut().find(|entity| entity.id == id) else {
                return Ok(None);
            };
            entity.titre = changes.titre;
            entity.genre = changes.genre;
            entity.plateforme = changes.plateforme;
            entity.editeur = changes.editeur;
            entity.developpeur = changes.developpeur;
            entity.annee_sortie = changes.annee_sortie;
            entity.metacritic_score = changes.metacritic_score;
            entity.temps_jeu_heures = changes.temps_jeu_heures;
            entity.termine = changes.termine;
            entity.favorite = changes.favorite;
            entity.date_modification = changes.date_modification;
            Ok(Some(entity.clone()))
        })
    }

    fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
        modified_at: SystemTime,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let mut records = store.records.lock().unwrap();
            let Some(entity) = records.iter_mut().find(|entity| entity.id == id) else {
                return Ok(None);
            };
            entity.favorite = favorite;
            entity.date_modification = modified_at;
            Ok(Some(entity.clone()))
        })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut records = store.records.lock().unwrap();
            let before = records.len();
            records.retain(|entity| entity.id != id);
            Ok(records.len() != before)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
