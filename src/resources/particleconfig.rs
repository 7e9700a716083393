//! Particle configuration record.
//!
//! One small JSON record selects the effect resource, the spawn pattern, and
//! whether diagnostics are shown to players.
//!
//! # Configuration File Format
//!
//! ```json
//! {
//!   "effectIdentifier": "particles/explosions_fx/explosion_c4_short.vpcf",
//!   "spawnMethod": 1,
//!   "debugEnabled": true
//! }
//! ```
//!
//! Files written by older builds use `ParticleFile`, `SpawnMethod` and
//! `Debug`; those keys are still accepted. Missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ParticleError;

pub const DEFAULT_EFFECT: &str = "particles/explosions_fx/explosion_c4_short.vpcf";
pub const DEFAULT_SPAWN_METHOD: i32 = 1;
pub const DEFAULT_DEBUG: bool = true;
pub const DEFAULT_CONFIG_PATH: &str = "./particle_config.json";

/// Immutable configuration record.
///
/// `spawn_method` is stored as read; it is only interpreted when an effect is
/// fired (see [`SpawnPattern::resolve`](crate::pattern::SpawnPattern::resolve)).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Opaque effect resource path handed to the entity API.
    #[serde(alias = "ParticleFile")]
    pub effect_identifier: String,
    /// Raw pattern selector, nominally 1..=5.
    #[serde(alias = "SpawnMethod")]
    pub spawn_method: i32,
    /// Show diagnostics on the console and in the player's chat.
    #[serde(alias = "Debug")]
    pub debug_enabled: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            effect_identifier: DEFAULT_EFFECT.to_string(),
            spawn_method: DEFAULT_SPAWN_METHOD,
            debug_enabled: DEFAULT_DEBUG,
        }
    }
}

impl ParticleConfig {
    pub fn new(effect_identifier: impl Into<String>, spawn_method: i32, debug_enabled: bool) -> Self {
        Self {
            effect_identifier: effect_identifier.into(),
            spawn_method,
            debug_enabled,
        }
    }

    /// Parse a record from JSON text.
    ///
    /// Fails with [`ParticleError::ConfigInvalid`] on malformed JSON, on a
    /// `null` document, and on an empty effect identifier.
    pub fn from_json(text: &str) -> Result<Self, ParticleError> {
        let parsed: Option<ParticleConfig> =
            serde_json::from_str(text).map_err(|e| ParticleError::ConfigInvalid(e.to_string()))?;
        let config = parsed
            .ok_or_else(|| ParticleError::ConfigInvalid("document is null".to_string()))?;
        if config.effect_identifier.trim().is_empty() {
            return Err(ParticleError::ConfigInvalid(
                "effectIdentifier must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Pretty-printed JSON with stable key order.
    pub fn to_json_pretty(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}
