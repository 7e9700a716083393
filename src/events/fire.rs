//! Fire command event.
//!
//! Triggering a [`FireEvent`] spawns the configured particle pattern around
//! the actor's avatar. See [`crate::systems::fire::fire_observer`].

use bevy_ecs::prelude::*;

use crate::components::avatar::ActorId;

#[derive(Event, Debug, Clone, Copy)]
pub struct FireEvent {
    /// Player who issued the command; `None` when it came from the console.
    pub actor: Option<ActorId>,
}
