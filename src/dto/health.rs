//! Health status payload.

use serde::Serialize;
use utoipa::ToSchema;

/// Payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok", or "degraded" while the store is unreachable.
    pub status: String,
}

impl HealthResponse {
    /// Build the response from the degraded flag maintained by the app state.
    pub fn from_degraded(degraded: bool) -> Self {
        let status = if degraded { "degraded" } else { "ok" };
        Self {
            status: status.to_owned(),
        }
    }
}
