//! Application-level configuration loading: listen port and MongoDB target.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LUDOTHEQUE_BACK_CONFIG_PATH";
/// Port used when neither the file nor the environment provides one.
const DEFAULT_PORT: u16 = 8080;
/// Connection string used when neither the file nor the environment provides one.
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// MongoDB connection string.
    pub mongo_uri: String,
    /// Database name; the store falls back to its default when absent.
    pub mongo_database: Option<String>,
}

impl AppConfig {
    /// Load the configuration from disk and the environment.
    ///
    /// Environment variables (`PORT`/`SERVER_PORT`, `MONGO_URI`, `MONGO_DB`)
    /// take precedence over the JSON file; baked-in defaults apply last.
    /// Loading never aborts startup: unreadable or unparsable files are
    /// logged and skipped.
    pub fn load() -> Self {
        let raw = read_config_file();
        let mut config: Self = raw.into();

        if let Some(port) = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
        {
            config.port = port;
        }
        if let Ok(uri) = env::var("MONGO_URI") {
            config.mongo_uri = uri;
        }
        if let Ok(database) = env::var("MONGO_DB") {
            config.mongo_database = Some(database);
        }

        config
    }
}

/// Read and parse the optional JSON configuration file.
fn read_config_file() -> RawConfig {
    let path = resolve_config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
            Ok(raw) => {
                info!(path = %path.display(), "loaded configuration file");
                raw
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse config; falling back to defaults"
                );
                RawConfig::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "config file not found; using built-in defaults"
            );
            RawConfig::default()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read config; falling back to defaults"
            );
            RawConfig::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    mongo: Option<RawMongo>,
}

#[derive(Debug, Default, Deserialize)]
/// MongoDB section of the configuration file.
struct RawMongo {
    uri: Option<String>,
    database: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let mongo = value.mongo.unwrap_or_default();
        Self {
            port: value.port.unwrap_or(DEFAULT_PORT),
            mongo_uri: mongo.uri.unwrap_or_else(|| DEFAULT_MONGO_URI.to_owned()),
            mongo_database: mongo.database,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
