//! Fire command handling for the ECS host.
//!
//! [`fire_observer`] reacts to [`FireEvent`] by running the
//! [`SpawnDispatcher`] against two adapters over the world:
//!
//! - [`EcsAvatars`] reads avatar poses from [`Avatar`], [`WorldPosition`] and
//!   [`Rotation`] components.
//! - [`EcsEffects`] creates effect entities through [`Commands`], declining
//!   effects missing from the [`PrecacheManifest`].
//!
//! Effect entities are queued through `Commands`, so they appear in the world
//! once the observer's commands are applied.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::avatar::{ActorId, Avatar};
use crate::components::particleeffect::{EffectActive, ParticleEffect};
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;
use crate::dispatcher::{AvatarPoses, EffectEntities, SpawnDispatcher};
use crate::events::fire::FireEvent;
use crate::geometry::Pose;
use crate::resources::configstore::ConfigStore;
use crate::resources::output::OutputBridge;
use crate::resources::precache::PrecacheManifest;

/// Avatar data needed to build a pose. Position and rotation may be missing.
pub type AvatarQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Avatar,
        Option<&'static WorldPosition>,
        Option<&'static Rotation>,
    ),
>;

/// [`AvatarPoses`] over an avatar query.
pub struct EcsAvatars<'a, 'w, 's> {
    avatars: &'a AvatarQuery<'w, 's>,
}

impl<'a, 'w, 's> EcsAvatars<'a, 'w, 's> {
    pub fn new(avatars: &'a AvatarQuery<'w, 's>) -> Self {
        Self { avatars }
    }

    fn find(&self, actor: ActorId) -> Option<(&Avatar, Option<&WorldPosition>, Option<&Rotation>)> {
        self.avatars.iter().find(|(avatar, _, _)| avatar.actor == actor)
    }
}

impl AvatarPoses for EcsAvatars<'_, '_, '_> {
    fn is_alive(&self, actor: ActorId) -> bool {
        self.find(actor).is_some_and(|(avatar, _, _)| avatar.alive)
    }

    fn pose(&self, actor: ActorId) -> Option<Pose> {
        let (avatar, position, rotation) = self.find(actor)?;
        if !avatar.alive {
            return None;
        }
        Some(Pose {
            origin: position?.pos,
            yaw_degrees: rotation.map(|r| r.degrees),
        })
    }
}

/// [`EffectEntities`] backed by `Commands`.
pub struct EcsEffects<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    precache: &'a PrecacheManifest,
}

impl<'a, 'w, 's> EcsEffects<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, precache: &'a PrecacheManifest) -> Self {
        Self { commands, precache }
    }
}

impl EffectEntities for EcsEffects<'_, '_, '_> {
    type Handle = Entity;

    fn create_effect(&mut self, effect: &str) -> Result<Entity, String> {
        if !self.precache.contains(effect) {
            return Err(format!("{} was not precached", effect));
        }
        Ok(self.commands.spawn(ParticleEffect::new(effect)).id())
    }

    fn place(&mut self, handle: Entity, position: Vec3, orientation: Vec3) -> Result<(), String> {
        self.commands.entity(handle).insert((
            WorldPosition { pos: position },
            Rotation {
                degrees: orientation.y,
            },
        ));
        Ok(())
    }

    fn activate(&mut self, handle: Entity) -> Result<(), String> {
        self.commands.entity(handle).insert(EffectActive);
        Ok(())
    }

    fn discard(&mut self, handle: Entity) {
        self.commands.entity(handle).despawn();
    }
}

/// Observer that spawns the configured pattern for the event's actor.
pub fn fire_observer(
    trigger: On<FireEvent>,
    store: Res<ConfigStore>,
    avatars: AvatarQuery,
    precache: Res<PrecacheManifest>,
    output: Option<Res<OutputBridge>>,
    mut commands: Commands,
) {
    let actor = trigger.event().actor;
    let mut feedback = output.as_deref().cloned();

    let poses = EcsAvatars::new(&avatars);
    let effects = EcsEffects::new(&mut commands, &precache);
    let mut dispatcher = SpawnDispatcher::new(poses, effects);
    let report = dispatcher.fire(&store, actor, &mut feedback);

    debug!(
        "fire by {:?}: {} ({} errors)",
        actor,
        report.summary(),
        report.errors.len()
    );
}
