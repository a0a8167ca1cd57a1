//! Process-scoped shared state: the installed storage backend handle.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{dao::game_store::GameStore, error::ServiceError};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the storage backend handle.
///
/// All durable data lives in the store; this struct only carries the live
/// connection handle, installed by the storage supervisor. The application
/// runs in degraded mode while no backend is installed.
pub struct AppState {
    game_store: RwLock<Option<Arc<dyn GameStore>>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new() -> SharedState {
        Arc::new(Self {
            game_store: RwLock::new(None),
        })
    }

    /// Obtain a handle to the current game store, if one is installed.
    pub async fn game_store(&self) -> Option<Arc<dyn GameStore>> {
        let guard = self.game_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the game store, or fail with a degraded-mode error.
    pub async fn require_game_store(&self) -> Result<Arc<dyn GameStore>, ServiceError> {
        self.game_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a new game store implementation and leave degraded mode.
    pub async fn install_game_store(&self, store: Arc<dyn GameStore>) {
        let mut guard = self.game_store.write().await;
        *guard = Some(store);
    }

    /// Remove the current game store and enter degraded mode.
    pub async fn clear_game_store(&self) {
        let mut guard = self.game_store.write().await;
        guard.take();
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.game_store.read().await;
        guard.is_none()
    }
}
