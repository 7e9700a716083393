//! Particle effect components.
//!
//! Entities created by the fire command carry a [`ParticleEffect`] naming the
//! effect resource they play. An effect is created inert, then placed with a
//! [`WorldPosition`](crate::components::worldposition::WorldPosition), then
//! started by inserting [`EffectActive`], mirroring the host's create,
//! teleport, start sequence.

use bevy_ecs::prelude::Component;

/// Tint applied to spawned effects (RGBA, green).
pub const EFFECT_TINT: [u8; 4] = [0, 128, 0, 255];

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ParticleEffect {
    /// Effect resource path, as found in the config.
    pub effect_name: String,
    /// RGBA color tint.
    pub tint: [u8; 4],
}

impl ParticleEffect {
    pub fn new(effect_name: impl Into<String>) -> Self {
        Self {
            effect_name: effect_name.into(),
            tint: EFFECT_TINT,
        }
    }
}

/// Marker: the effect has been started and is playing.
#[derive(Component, Debug, Clone, Copy)]
pub struct EffectActive;
