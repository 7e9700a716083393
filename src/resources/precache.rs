//! Resource precache manifest.
//!
//! Effect resources must be declared before the host will create entities
//! that use them. The declaration happens once per map load
//! (see [`restart_map_observer`](crate::systems::precache::restart_map_observer));
//! an effect that changes through a config reload only becomes usable after
//! the next map restart.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Clone, Default)]
pub struct PrecacheManifest {
    resources: FxHashSet<String>,
}

impl PrecacheManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource. Returns `false` if it was already declared.
    pub fn add_resource(&mut self, path: impl Into<String>) -> bool {
        self.resources.insert(path.into())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.resources.contains(path)
    }

    /// Forget every declaration (a new map starts with an empty manifest).
    pub fn clear(&mut self) {
        self.resources.clear();
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
