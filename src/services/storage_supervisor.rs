//! Keeps the storage backend connected, retrying in the background and
//! toggling degraded mode when connectivity changes.

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::game_store::mongodb::{MongoConfig, MongoGameStore},
    state::SharedState,
};

const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(10);
const HEALTHY_PING_INTERVAL: Duration = Duration::from_secs(5);

/// Supervise the MongoDB-backed store.
///
/// While a store is installed it is pinged periodically; a failed ping drops
/// it and flips the application into degraded mode. While no store is
/// installed, connection attempts are retried with exponential backoff.
pub async fn run_storage_supervisor(state: SharedState, config: MongoConfig) {
    let mut delay = INITIAL_RETRY_DELAY;

    loop {
        if let Some(store) = state.game_store().await {
            match store.health_check().await {
                Ok(()) => {
                    // Healthy connection: reset the retry backoff and avoid
                    // hammering the database with pings.
                    delay = INITIAL_RETRY_DELAY;
                    sleep(HEALTHY_PING_INTERVAL).await;
                }
                Err(err) => {
                    warn!(error = %err, "storage ping failed; entering degraded mode");
                    state.clear_game_store().await;
                    sleep(delay).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY);
                }
            }
            continue;
        }

        match MongoGameStore::connect(config.clone()).await {
            Ok(store) => {
                info!("connected to MongoDB; leaving degraded mode");
                state.install_game_store(Arc::new(store)).await;
                delay = INITIAL_RETRY_DELAY;
            }
            Err(err) => {
                warn!(error = %err, "MongoDB connection attempt failed");
                sleep(delay).await;
                delay = (delay * 2).min(MAX_RETRY_DELAY);
            }
        }
    }
}
