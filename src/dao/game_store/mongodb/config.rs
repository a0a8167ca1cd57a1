use mongodb::options::ClientOptions;

use super::error::{MongoDaoError, MongoResult};

/// Database used when the configuration does not name one.
const DEFAULT_DATABASE: &str = "ludotheque";

/// Connection settings for the MongoDB backend.
#[derive(Clone)]
pub struct MongoConfig {
    /// Parsed client options derived from the connection URI.
    pub options: ClientOptions,
    /// Name of the database holding the game collection.
    pub database_name: String,
}

impl MongoConfig {
    /// Parse a connection URI, falling back to the default database name.
    pub async fn from_uri(uri: &str, db_name: Option<&str>) -> MongoResult<Self> {
        let database_name = db_name.unwrap_or(DEFAULT_DATABASE).to_owned();
        let options =
            ClientOptions::parse(uri)
                .await
                .map_err(|source| MongoDaoError::InvalidUri {
                    uri: uri.to_owned(),
                    source,
                })?;

        Ok(Self {
            options,
            database_name,
        })
    }
}
