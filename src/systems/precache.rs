//! Effect resource precaching.
//!
//! The configured effect is declared once when the world is set up
//! ([`precache_effects`]) and again on every map restart
//! ([`restart_map_observer`]). Effects spawned during the previous map are
//! removed by the restart.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::particleeffect::ParticleEffect;
use crate::events::restartmap::RestartMapEvent;
use crate::resources::configstore::ConfigStore;
use crate::resources::precache::PrecacheManifest;

/// Declare the currently configured effect in `manifest`.
pub fn precache_effects(store: &ConfigStore, manifest: &mut PrecacheManifest) {
    let effect = store.current().effect_identifier.clone();
    if manifest.add_resource(effect.clone()) {
        info!("Precached {}", effect);
    }
}

/// Observer that simulates a map change: clear effects, precache again.
pub fn restart_map_observer(
    _trigger: On<RestartMapEvent>,
    store: Res<ConfigStore>,
    mut manifest: ResMut<PrecacheManifest>,
    effects: Query<Entity, With<ParticleEffect>>,
    mut commands: Commands,
) {
    let mut removed = 0;
    for entity in effects.iter() {
        commands.entity(entity).despawn();
        removed += 1;
    }
    manifest.clear();
    precache_effects(&store, &mut manifest);
    info!("Map restarted, {} effects cleared", removed);
}
