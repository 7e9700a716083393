//! Active particle configuration resource.
//!
//! [`ConfigStore`] always holds a complete [`ParticleConfig`]: either the
//! built-in default or the last record that loaded successfully. Records are
//! never edited in place; a reload builds a new record and swaps the shared
//! pointer, so a reader holding [`ConfigStore::current`] keeps a consistent
//! snapshot.
//!
//! # Lifetime
//!
//! ```text
//! (no store) --bootstrap, no file--> Default --reload ok--> Loaded
//! (no store) --bootstrap, file ok--> Loaded  --reload ok--> Loaded
//! any state  --reload failed-------> same state
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::particleconfig::{DEFAULT_CONFIG_PATH, ParticleConfig};

/// Where the active record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    /// Built-in defaults; no source has loaded yet.
    Default,
    /// Loaded from the configuration source at least once.
    Loaded,
}

#[derive(Resource, Debug, Clone)]
pub struct ConfigStore {
    current: Arc<ParticleConfig>,
    state: ConfigState,
    /// Path of the configuration file backing this store.
    pub config_path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Store holding the default record.
    pub fn new() -> Self {
        Self {
            current: Arc::new(ParticleConfig::default()),
            state: ConfigState::Default,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Store already holding a loaded record.
    pub fn with_config(config: ParticleConfig) -> Self {
        Self {
            current: Arc::new(config),
            state: ConfigState::Loaded,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create the store for the file at `path`.
    ///
    /// Loads the file when it exists. When it does not, the default record is
    /// written there so operators have something to edit. Neither a bad file
    /// nor a failed write is fatal: both leave the default record active.
    pub fn bootstrap(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = Self {
            config_path: path.clone(),
            ..Self::new()
        };

        if path.exists() {
            match load_from_file(&path) {
                Ok(config) => {
                    info!(
                        "Loaded particle config: effect={}, method={}, debug={}",
                        config.effect_identifier, config.spawn_method, config.debug_enabled
                    );
                    store.replace(config);
                }
                Err(e) => warn!("Particle config unusable, using defaults: {}", e),
            }
        } else if let Err(e) = save_to_file(&path, &store.current) {
            warn!("{}", e);
        } else {
            info!("Wrote default particle config to {:?}", path);
        }

        store
    }

    /// The active record.
    pub fn current(&self) -> Arc<ParticleConfig> {
        Arc::clone(&self.current)
    }

    /// Swap in `config` and return the record it replaced.
    pub fn replace(&mut self, config: ParticleConfig) -> Arc<ParticleConfig> {
        self.state = ConfigState::Loaded;
        std::mem::replace(&mut self.current, Arc::new(config))
    }

    pub fn state(&self) -> ConfigState {
        self.state
    }
}

/// Read and parse a configuration file.
pub fn load_from_file(path: &Path) -> Result<ParticleConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to load config file: {}", e))?;
    ParticleConfig::from_json(&text).map_err(|e| e.to_string())
}

/// Write `config` as pretty JSON, creating the file if needed.
pub fn save_to_file(path: &Path, config: &ParticleConfig) -> Result<(), String> {
    let json = config.to_json_pretty()?;
    std::fs::write(path, json)
        .map_err(|e| format!("Failed to save config file {}: {}", path.display(), e))
}
