//! Field rules enforced on candidate game records.

use time::OffsetDateTime;

use crate::dto::game::GameInput;

/// Earliest release year accepted for `annee_sortie`.
pub const MIN_RELEASE_YEAR: i32 = 1970;

/// Current calendar year, the upper bound for `annee_sortie`.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Check a candidate payload against the collection field rules.
///
/// Rules are evaluated independently and in a fixed order (titre, genre,
/// plateforme, annee_sortie, metacritic_score, temps_jeu_heures); every
/// violation is collected, none short-circuits. When `partial` is true a
/// mandatory field is only checked if the payload carries it.
///
/// Returns one human-readable message per violated rule, or an empty vec.
pub fn validate_game(input: &GameInput, partial: bool) -> Vec<String> {
    let mut errors = Vec::new();
    let max_year = current_year();

    if !partial || input.titre.is_some() {
        match &input.titre {
            Some(titre) if !titre.trim().is_empty() => {}
            _ => errors.push("field `titre` is required and must be a non-empty string".to_owned()),
        }
    }

    if !partial || input.genre.is_some() {
        match &input.genre {
            Some(genre) if !genre.is_empty() => {}
            _ => errors.push("field `genre` must be an array with at least one entry".to_owned()),
        }
    }

    if !partial || input.plateforme.is_some() {
        match &input.plateforme {
            Some(plateforme) if !plateforme.is_empty() => {}
            _ => errors
                .push("field `plateforme` must be an array with at least one entry".to_owned()),
        }
    }

    if let Some(annee) = input.annee_sortie
        && !(MIN_RELEASE_YEAR..=max_year).contains(&annee)
    {
        errors.push(format!(
            "field `annee_sortie` must be between {MIN_RELEASE_YEAR} and {max_year}"
        ));
    }

    if let Some(score) = input.metacritic_score
        && !(0..=100).contains(&score)
    {
        errors.push("field `metacritic_score` must be between 0 and 100".to_owned());
    }

    if let Some(hours) = input.temps_jeu_heures
        && hours < 0.0
    {
        errors.push("field `temps_jeu_heures` must be greater than or equal to 0".to_owned());
    }

    errors
}
