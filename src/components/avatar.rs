//! Avatar component: the in-world body controlled by a player.
//!
//! Fire commands name an [`ActorId`]; the host finds the entity carrying the
//! matching [`Avatar`] and reads its [`WorldPosition`] and optional
//! [`Rotation`] to build a pose.
//!
//! [`WorldPosition`]: crate::components::worldposition::WorldPosition
//! [`Rotation`]: crate::components::rotation::Rotation

use bevy_ecs::prelude::Component;

/// Opaque identity of a player issuing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub actor: ActorId,
    /// Dead avatars keep their entity but cannot trigger effects.
    pub alive: bool,
}

impl Avatar {
    pub fn new(actor: ActorId) -> Self {
        Self { actor, alive: true }
    }
}
