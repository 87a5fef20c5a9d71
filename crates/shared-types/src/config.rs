use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store configuration, deserialized from `config.toml`.
///
/// Construction happens once at startup; the loaded value is injected into
/// the application state rather than read from a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the snapshot files. `None` resolves to the
    /// platform-local data directory at load time.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Seed the demo directory and cases when no saved state exists.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_demo_data: true,
        }
    }
}
