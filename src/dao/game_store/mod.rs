//! Storage abstraction for the game collection.

#[cfg(test)]
pub mod memory;
pub mod mongodb;

use std::time::SystemTime;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::models::{GameChanges, GameDraft, GameEntity, GameFilter};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for game records.
///
/// Mutations return the record as re-read after the write so callers always
/// observe the persisted state, and `None` when the id matches nothing.
pub trait GameStore: Send + Sync {
    /// Insert a new record, assigning its identifier, and return it as persisted.
    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Load a single record by id.
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// List records matching the filter, newest first by creation date.
    fn list_games(&self, filter: GameFilter) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Replace the mutable fields of an existing record.
    fn update_game(
        &self,
        id: Uuid,
        changes: GameChanges,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Set the favorite flag and modification timestamp of an existing record.
    fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
        modified_at: SystemTime,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Remove a record permanently; `true` when a record was deleted.
    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    /// Verify the backend connection is alive.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
