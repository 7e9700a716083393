//! Error taxonomy shared by the spawn dispatcher and the reload controller.
//!
//! None of these errors is fatal to the host: every path degrades to "no
//! spawn happened" or "configuration unchanged". Whether the text ever reaches
//! a player is decided by the `debug_enabled` flag of the active
//! [`ParticleConfig`](crate::resources::particleconfig::ParticleConfig).

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    /// No configuration source exists at reload time.
    #[error("config file not found: {0}")]
    ConfigMissing(String),
    /// The source exists but could not be read or parsed into a record.
    #[error("config invalid: {0}")]
    ConfigInvalid(String),
    /// The triggering avatar is absent, dead, or has no readable pose.
    #[error("player invalid or not alive")]
    AvatarUnavailable,
    /// The entity API declined to create, place, or activate one effect.
    #[error("particle creation failed at {position}: {reason}")]
    EntityCreationFailed { position: Vec3, reason: String },
    /// `spawnMethod` was outside 1..=5; the front pattern was used instead.
    #[error("invalid spawn method {0}, using default (1)")]
    InvalidPatternSelector(i32),
}

impl ParticleError {
    /// Short message suitable for a player's chat line.
    pub fn chat_text(&self) -> &'static str {
        match self {
            ParticleError::ConfigMissing(_) => "Config file not found!",
            ParticleError::ConfigInvalid(_) => "Failed to reload config!",
            ParticleError::AvatarUnavailable => "You must be alive to spawn particles!",
            ParticleError::EntityCreationFailed { .. } => "Failed to spawn particle!",
            ParticleError::InvalidPatternSelector(_) => {
                "Invalid spawn method in config, using in-front!"
            }
        }
    }
}
