//! Request and response shapes for the game collection routes.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{dao::models::GameEntity, dto::format_system_time};

/// Candidate payload accepted by the create and update routes.
///
/// Every field is optional at the transport level so that an absent field can
/// be told apart from one carrying an empty or zero value; the validator
/// decides which fields are mandatory for the requested operation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GameInput {
    /// Game title; mandatory, non-empty once trimmed.
    pub titre: Option<String>,
    /// Genres; mandatory, at least one entry.
    pub genre: Option<Vec<String>>,
    /// Platforms the game is owned on; mandatory, at least one entry.
    pub plateforme: Option<Vec<String>>,
    /// Publisher name.
    pub editeur: Option<String>,
    /// Developer studio name.
    pub developpeur: Option<String>,
    /// Release year, between 1970 and the current calendar year.
    pub annee_sortie: Option<i32>,
    /// Metacritic score, between 0 and 100.
    pub metacritic_score: Option<i32>,
    /// Hours of play time, zero or more.
    pub temps_jeu_heures: Option<f64>,
    /// Whether the game has been completed.
    pub termine: Option<bool>,
    /// Favorite flag; ignored on creation, preserved on update when omitted.
    pub favorite: Option<bool>,
}

/// Filters accepted by the listing route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameListQuery {
    /// Keep only games whose `genre` array contains this value.
    pub genre: Option<String>,
    /// Keep only games whose `plateforme` array contains this value.
    pub plateforme: Option<String>,
    /// Keep only games matching this completion flag.
    pub termine: Option<bool>,
}

/// Externally visible projection of a stored game record.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    /// Record identifier in its string form.
    pub id: String,
    /// Game title.
    pub titre: String,
    /// Genres, never empty.
    pub genre: Vec<String>,
    /// Platforms, never empty.
    pub plateforme: Vec<String>,
    /// Publisher name, empty string when unknown.
    pub editeur: String,
    /// Developer studio name, empty string when unknown.
    pub developpeur: String,
    /// Release year, null when unknown.
    pub annee_sortie: Option<i32>,
    /// Metacritic score, null when unknown.
    pub metacritic_score: Option<i32>,
    /// Hours of play time.
    pub temps_jeu_heures: f64,
    /// Whether the game has been completed.
    pub termine: bool,
    /// Favorite flag.
    pub favorite: bool,
    /// Creation timestamp, RFC 3339.
    pub date_ajout: String,
    /// Last modification timestamp, RFC 3339.
    pub date_modification: String,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id.to_string(),
            titre: entity.titre,
            genre: entity.genre,
            plateforme: entity.plateforme,
            editeur: entity.editeur,
            developpeur: entity.developpeur,
            annee_sortie: entity.annee_sortie,
            metacritic_score: entity.metacritic_score,
            temps_jeu_heures: entity.temps_jeu_heures,
            termine: entity.termine,
            favorite: entity.favorite,
            date_ajout: format_system_time(entity.date_ajout),
            date_modification: format_system_time(entity.date_modification),
        }
    }
}
