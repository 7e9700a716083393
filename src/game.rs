//! Headless host setup.
//!
//! [`setup_world`] inserts the resources and observers the particle commands
//! need; the avatar helpers stand in for the game server's player
//! connect/spawn/death flow.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use log::info;

use crate::components::avatar::{ActorId, Avatar};
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;
use crate::resources::configstore::ConfigStore;
use crate::resources::output::{OutputLine, setup_output};
use crate::resources::precache::PrecacheManifest;
use crate::systems::fire::fire_observer;
use crate::systems::precache::{precache_effects, restart_map_observer};
use crate::systems::reloadconfig::reload_config_observer;

/// Prepare `world` for particle commands and return the output receiver.
///
/// Inserts `store`, precaches its effect, sets up the output bridge, and
/// registers the fire, reload-config and restart-map observers.
pub fn setup_world(world: &mut World, store: ConfigStore) -> Receiver<OutputLine> {
    let mut manifest = PrecacheManifest::new();
    precache_effects(&store, &mut manifest);
    world.insert_resource(manifest);
    world.insert_resource(store);
    let rx = setup_output(world);

    world.spawn(Observer::new(fire_observer));
    world.spawn(Observer::new(reload_config_observer));
    world.spawn(Observer::new(restart_map_observer));
    // Observers must be registered before any command is triggered.
    world.flush();

    rx
}

/// Find the entity of `actor`'s avatar.
pub fn find_avatar(world: &mut World, actor: ActorId) -> Option<Entity> {
    let mut query = world.query::<(Entity, &Avatar)>();
    query
        .iter(world)
        .find(|(_, avatar)| avatar.actor == actor)
        .map(|(entity, _)| entity)
}

/// Spawn (or respawn) `actor`'s avatar alive at `pos`, facing `yaw` degrees.
///
/// A `None` yaw leaves the avatar without a [`Rotation`].
pub fn spawn_avatar(
    world: &mut World,
    actor: ActorId,
    pos: WorldPosition,
    yaw: Option<f32>,
) -> Entity {
    if let Some(entity) = find_avatar(world, actor) {
        world.despawn(entity);
    }
    let mut entity = world.spawn((Avatar::new(actor), pos));
    if let Some(degrees) = yaw {
        entity.insert(Rotation { degrees });
    }
    info!("Avatar {} spawned at {}", actor, pos.pos);
    entity.id()
}

/// Mark `actor`'s avatar dead. Returns `false` if there is no such avatar.
pub fn kill_avatar(world: &mut World, actor: ActorId) -> bool {
    let Some(entity) = find_avatar(world, actor) else {
        return false;
    };
    if let Some(mut avatar) = world.get_mut::<Avatar>(entity) {
        avatar.alive = false;
    }
    info!("Avatar {} died", actor);
    true
}
