//! Configuration hot-reload.
//!
//! [`ReloadController::reload`] re-reads the configuration source and swaps
//! the [`ConfigStore`] record only when a complete record parsed. On any
//! failure the store is left exactly as it was.
//!
//! `spawnMethod` is not range-checked here. Out-of-range values are stored
//! and resolved when an effect is fired.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::error::ParticleError;
use crate::resources::configstore::ConfigStore;
use crate::resources::particleconfig::ParticleConfig;

/// Something a configuration record can be read from.
pub trait ConfigSource {
    /// Raw text of the record.
    ///
    /// Returns [`ParticleError::ConfigMissing`] when the source does not exist
    /// and [`ParticleError::ConfigInvalid`] when it exists but cannot be read.
    fn fetch(&self) -> Result<String, ParticleError>;
}

/// Configuration file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for JsonFileSource {
    fn fetch(&self) -> Result<String, ParticleError> {
        if !self.path.exists() {
            return Err(ParticleError::ConfigMissing(self.path.display().to_string()));
        }
        std::fs::read_to_string(&self.path).map_err(|e| {
            ParticleError::ConfigInvalid(format!("failed to read {}: {}", self.path.display(), e))
        })
    }
}

/// In-memory source; `None` behaves like a missing file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub text: Option<String>,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn missing() -> Self {
        Self { text: None }
    }
}

impl ConfigSource for MemorySource {
    fn fetch(&self) -> Result<String, ParticleError> {
        self.text
            .clone()
            .ok_or_else(|| ParticleError::ConfigMissing("<memory>".to_string()))
    }
}

/// What a successful reload installed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReloadSummary {
    pub effect_identifier: String,
    pub spawn_method: i32,
    /// The new record names a different effect than the one it replaced.
    pub effect_changed: bool,
}

impl std::fmt::Display for ReloadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Particle={}, Method={}",
            self.effect_identifier, self.spawn_method
        )
    }
}

/// A failed reload: the error plus the record that stayed active.
#[derive(Debug, Clone, PartialEq)]
pub struct ReloadFailure {
    pub error: ParticleError,
    pub retained: Arc<ParticleConfig>,
}

/// Re-reads configuration from a source into a store.
pub struct ReloadController<S> {
    source: S,
}

impl<S: ConfigSource> ReloadController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn reload(&self, store: &mut ConfigStore) -> Result<ReloadSummary, ReloadFailure> {
        let parsed = self
            .source
            .fetch()
            .and_then(|text| ParticleConfig::from_json(&text));

        let config = match parsed {
            Ok(config) => config,
            Err(error) => {
                warn!("Reload failed: {}", error);
                return Err(ReloadFailure {
                    error,
                    retained: store.current(),
                });
            }
        };

        let summary = ReloadSummary {
            effect_identifier: config.effect_identifier.clone(),
            spawn_method: config.spawn_method,
            effect_changed: config.effect_identifier != store.current().effect_identifier,
        };
        store.replace(config);
        info!("Reloaded: {}", summary);
        Ok(summary)
    }
}
