//! The MongoDB-backed game store.

use std::time::SystemTime;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Collection, Database, bson::doc, options::IndexOptions};
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{MongoGameDocument, doc_id, filter_doc, set_fields},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameChanges, GameDraft, GameEntity, GameFilter},
    storage::StorageResult,
};

const GAME_COLLECTION_NAME: &str = "games";

/// MongoDB-backed [`GameStore`] implementation.
#[derive(Clone)]
pub struct MongoGameStore {
    database: Database,
}

impl MongoGameStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (_client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let store = Self { database };
        store.ensure_indexes().await?;
        Ok(store)
    }

    /// Index backing the newest-first listing order.
    async fn ensure_indexes(&self) -> MongoResult<()> {
        let collection = self
            .database
            .collection::<mongodb::bson::Document>(GAME_COLLECTION_NAME);
        let index = mongodb::IndexModel::builder()
            .keys(doc! {"date_ajout": -1})
            .options(
                IndexOptions::builder()
                    .name(Some("game_date_ajout_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: GAME_COLLECTION_NAME,
                index: "date_ajout",
                source,
            })?;

        Ok(())
    }

    fn collection(&self) -> Collection<MongoGameDocument> {
        self.database
            .collection::<MongoGameDocument>(GAME_COLLECTION_NAME)
    }

    async fn insert_game(&self, draft: GameDraft) -> MongoResult<GameEntity> {
        let id = Uuid::new_v4();
        let document = MongoGameDocument::from_draft(id, draft);
        let collection = self.collection();

        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::InsertGame { id, source })?;

        // Round-trip through the collection so the caller observes exactly
        // what was persisted.
        self.read_back(&collection, id).await
    }

    async fn find_game(&self, id: Uuid) -> MongoResult<Option<GameEntity>> {
        let document = self
            .collection()
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::LoadGame { id, source })?;

        Ok(document.map(Into::into))
    }

    async fn list_games(&self, filter: GameFilter) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<MongoGameDocument> = self
            .collection()
            .find(filter_doc(&filter))
            .sort(doc! {"date_ajout": -1})
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn update_game(&self, id: Uuid, changes: GameChanges) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection();
        let result = collection
            .update_one(doc_id(id), doc! {"$set": set_fields(changes)})
            .await
            .map_err(|source| MongoDaoError::UpdateGame { id, source })?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        self.read_back(&collection, id).await.map(Some)
    }

    async fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
        modified_at: SystemTime,
    ) -> MongoResult<Option<GameEntity>> {
        let collection = self.collection();
        let update = doc! {"$set": {
            "favorite": favorite,
            "date_modification": mongodb::bson::DateTime::from_system_time(modified_at),
        }};
        let result = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::UpdateGame { id, source })?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        self.read_back(&collection, id).await.map(Some)
    }

    async fn delete_game(&self, id: Uuid) -> MongoResult<bool> {
        let result = self
            .collection()
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::DeleteGame { id, source })?;

        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> MongoResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn read_back(
        &self,
        collection: &Collection<MongoGameDocument>,
        id: Uuid,
    ) -> MongoResult<GameEntity> {
        collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::LoadGame { id, source })?
            .map(Into::into)
            .ok_or(MongoDaoError::ReadBack { id })
    }
}

impl GameStore for MongoGameStore {
    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(draft).await.map_err(Into::into) })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn list_games(
        &self,
        filter: GameFilter,
    ) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games(filter).await.map_err(Into::into) })
    }

    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.update_game(id, changes).await.map_err(Into::into) })
    }

    fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
        modified_at: SystemTime,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .set_favorite(id, favorite, modified_at)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_game(id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
