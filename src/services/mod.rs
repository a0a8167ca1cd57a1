//! Operation logic sitting between the HTTP routes and the storage layer.

/// OpenAPI documentation generation.
pub mod documentation;
/// Business logic for the game collection operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Collection statistics aggregation.
pub mod stats_service;
/// Storage connection supervision.
pub mod storage_supervisor;
