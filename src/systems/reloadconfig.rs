//! Reload-config command handling for the ECS host.
//!
//! [`reload_config_observer`] re-reads the file the [`ConfigStore`] was
//! bootstrapped from. Failures are always printed on the console; the actor
//! only sees them when the retained config has debug enabled. Success always
//! reaches the actor.

use bevy_ecs::prelude::*;

use crate::dispatcher::Feedback;
use crate::events::reloadconfig::ReloadConfigEvent;
use crate::reload::{JsonFileSource, ReloadController};
use crate::resources::configstore::ConfigStore;
use crate::resources::output::OutputBridge;

/// Observer that reloads the particle configuration from disk.
pub fn reload_config_observer(
    trigger: On<ReloadConfigEvent>,
    mut store: ResMut<ConfigStore>,
    output: Option<Res<OutputBridge>>,
) {
    let actor = trigger.event().actor;
    let mut feedback = output.as_deref().cloned();
    let controller = ReloadController::new(JsonFileSource::new(store.config_path.clone()));

    match controller.reload(&mut store) {
        Ok(summary) => {
            feedback.console(&format!("Reloaded: {}", summary));
            if let Some(actor) = actor {
                let text = if summary.effect_changed {
                    "Particle config reloaded! Restart map for new particle file."
                } else {
                    "Particle config reloaded!"
                };
                feedback.chat(actor, text);
            }
        }
        Err(failure) => {
            feedback.console(&format!("ERROR: Reload failed - {}", failure.error));
            if let Some(actor) = actor {
                if failure.retained.debug_enabled {
                    feedback.chat(actor, failure.error.chat_text());
                }
            }
        }
    }
}
