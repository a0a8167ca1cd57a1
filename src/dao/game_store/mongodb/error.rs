use mongodb::error::Error as MongoError;
use thiserror::Error;
use uuid::Uuid;

/// Result alias for MongoDB storage operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Failures raised by the MongoDB backend, one variant per operation.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection URI could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// Offending URI.
        uri: String,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The client could not be built from the parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The database never answered the initial ping.
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A health-check ping failed on an established connection.
    #[error("MongoDB ping health check failed")]
    HealthPing {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// Index creation failed.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Collection the index belongs to.
        collection: &'static str,
        /// Index key description.
        index: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A record could not be inserted.
    #[error("failed to insert game `{id}`")]
    InsertGame {
        /// Record identifier.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A freshly written record could not be read back.
    #[error("game `{id}` could not be read back after the write")]
    ReadBack {
        /// Record identifier.
        id: Uuid,
    },
    /// A record could not be loaded.
    #[error("failed to load game `{id}`")]
    LoadGame {
        /// Record identifier.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The collection could not be listed.
    #[error("failed to list games")]
    ListGames {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A record could not be updated.
    #[error("failed to update game `{id}`")]
    UpdateGame {
        /// Record identifier.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A record could not be deleted.
    #[error("failed to delete game `{id}`")]
    DeleteGame {
        /// Record identifier.
        id: Uuid,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
}
