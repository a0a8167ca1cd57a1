//! Domain types shared between the service layer and the storage backends.

use std::time::SystemTime;
use uuid::Uuid;

/// Game record as persisted by the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntity {
    /// Primary key of the record, assigned by the store at insert.
    pub id: Uuid,
    /// Game title.
    pub titre: String,
    /// Genres, never empty once the record exists.
    pub genre: Vec<String>,
    /// Platforms, never empty once the record exists.
    pub plateforme: Vec<String>,
    /// Publisher name, empty string when unknown.
    pub editeur: String,
    /// Developer studio name, empty string when unknown.
    pub developpeur: String,
    /// Release year when known.
    pub annee_sortie: Option<i32>,
    /// Metacritic score when known.
    pub metacritic_score: Option<i32>,
    /// Hours of play time.
    pub temps_jeu_heures: f64,
    /// Whether the game has been completed.
    pub termine: bool,
    /// Favorite flag, only flipped through the dedicated operation.
    pub favorite: bool,
    /// Creation timestamp, set once.
    pub date_ajout: SystemTime,
    /// Last modification timestamp, bumped on every mutation.
    pub date_modification: SystemTime,
}

/// Field values for a record about to be inserted, defaults already applied.
#[derive(Debug, Clone)]
pub struct GameDraft {
    /// Game title.
    pub titre: String,
    /// Genres.
    pub genre: Vec<String>,
    /// Platforms.
    pub plateforme: Vec<String>,
    /// Publisher name.
    pub editeur: String,
    /// Developer studio name.
    pub developpeur: String,
    /// Release year when provided.
    pub annee_sortie: Option<i32>,
    /// Metacritic score when provided.
    pub metacritic_score: Option<i32>,
    /// Hours of play time.
    pub temps_jeu_heures: f64,
    /// Completion flag.
    pub termine: bool,
    /// Favorite flag, always false on creation.
    pub favorite: bool,
    /// Creation timestamp.
    pub date_ajout: SystemTime,
    /// Modification timestamp, equal to `date_ajout` at creation.
    pub date_modification: SystemTime,
}

/// Replacement values applied to an existing record by a full update.
///
/// Covers every mutable field; `id` and `date_ajout` are never replaced.
#[derive(Debug, Clone)]
pub struct GameChanges {
    /// Game title.
    pub titre: String,
    /// Genres.
    pub genre: Vec<String>,
    /// Platforms.
    pub plateforme: Vec<String>,
    /// Publisher name.
    pub editeur: String,
    /// Developer studio name.
    pub developpeur: String,
    /// Release year when provided.
    pub annee_sortie: Option<i32>,
    /// Metacritic score when provided.
    pub metacritic_score: Option<i32>,
    /// Hours of play time.
    pub temps_jeu_heures: f64,
    /// Completion flag.
    pub termine: bool,
    /// Favorite flag, resolved by the caller before the write.
    pub favorite: bool,
    /// New modification timestamp.
    pub date_modification: SystemTime,
}

/// Filters applied when listing game records.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    /// Keep records whose `genre` array contains this value.
    pub genre: Option<String>,
    /// Keep records whose `plateforme` array contains this value.
    pub plateforme: Option<String>,
    /// Keep records matching this completion flag.
    pub termine: Option<bool>,
}
