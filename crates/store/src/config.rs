use std::path::{Path, PathBuf};

use shared_types::StoreConfig;

/// Default config file path, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Read and parse the config file. A missing or unparseable file falls back
/// to defaults with a logged note rather than failing startup.
pub fn load(path: &Path) -> StoreConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
            StoreConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "No config file, using defaults");
            StoreConfig::default()
        }
    }
}

/// Resolve the snapshot data directory for a config: the configured path if
/// set, otherwise `precinct/` under the platform-local data directory.
pub fn data_dir(config: &StoreConfig) -> PathBuf {
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("precinct")
}
