use mongodb::bson::{Bson, DateTime, Document, doc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{GameChanges, GameDraft, GameEntity, GameFilter};

/// Stored shape of a game record in the `games` collection.
///
/// Every defaultable field carries `#[serde(default)]` so documents written
/// before a field existed decode to the documented default instead of
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    #[serde(rename = "_id")]
    id: mongodb::bson::Uuid,
    titre: String,
    genre: Vec<String>,
    plateforme: Vec<String>,
    #[serde(default)]
    editeur: String,
    #[serde(default)]
    developpeur: String,
    #[serde(default)]
    annee_sortie: Option<i32>,
    #[serde(default)]
    metacritic_score: Option<i32>,
    #[serde(default)]
    temps_jeu_heures: f64,
    #[serde(default)]
    termine: bool,
    #[serde(default)]
    favorite: bool,
    date_ajout: DateTime,
    date_modification: DateTime,
}

impl MongoGameDocument {
    /// Build the document for a draft record under the given identifier.
    pub fn from_draft(id: Uuid, draft: GameDraft) -> Self {
        Self {
            id: bson_uuid(id),
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
            date_ajout: DateTime::from_system_time(draft.date_ajout),
            date_modification: DateTime::from_system_time(draft.date_modification),
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: Uuid::from_bytes(value.id.bytes()),
            titre: value.titre,
            genre: value.genre,
            plateforme: value.plateforme,
            editeur: value.editeur,
            developpeur: value.developpeur,
            annee_sortie: value.annee_sortie,
            metacritic_score: value.metacritic_score,
            temps_jeu_heures: value.temps_jeu_heures,
            termine: value.termine,
            favorite: value.favorite,
            date_ajout: value.date_ajout.to_system_time(),
            date_modification: value.date_modification.to_system_time(),
        }
    }
}

fn bson_uuid(id: Uuid) -> mongodb::bson::Uuid {
    mongodb::bson::Uuid::from_bytes(id.into_bytes())
}

/// Query document matching a record by its primary key.
pub fn doc_id(id: Uuid) -> Document {
    doc! {"_id": bson_uuid(id)}
}

/// `$set` document replacing every mutable field of a record.
pub fn set_fields(changes: GameChanges) -> Document {
    doc! {
        "titre": changes.titre,
        "genre": changes.genre,
        "plateforme": changes.plateforme,
        "editeur": changes.editeur,
        "developpeur": changes.developpeur,
        "annee_sortie": changes.annee_sortie.map_or(Bson::Null, Bson::Int32),
        "metacritic_score": changes.metacritic_score.map_or(Bson::Null, Bson::Int32),
        "temps_jeu_heures": changes.temps_jeu_heures,
        "termine": changes.termine,
        "favorite": changes.favorite,
        "date_modification": DateTime::from_system_time(changes.date_modification),
    }
}

/// Query document for the listing filters.
pub fn filter_doc(filter: &GameFilter) -> Document {
    let mut query = Document::new();
    if let Some(genre) = &filter.genre {
        query.insert("genre", doc! {"$in": [genre.as_str()]});
    }
    if let Some(plateforme) = &filter.plateforme {
        query.insert("plateforme", doc! {"$in": [plateforme.as_str()]});
    }
    if let Some(termine) = filter.termine {
        query.insert("termine", termine);
    }
    query
}
