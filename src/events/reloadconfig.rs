//! Reload-config command event.
//!
//! Triggering a [`ReloadConfigEvent`] re-reads the configuration file into
//! [`ConfigStore`](crate::resources::configstore::ConfigStore). The outcome is
//! printed on the console and, when an actor is present, sent to their chat.

use bevy_ecs::prelude::*;

use crate::components::avatar::ActorId;

#[derive(Event, Debug, Clone, Copy)]
pub struct ReloadConfigEvent {
    pub actor: Option<ActorId>,
}
