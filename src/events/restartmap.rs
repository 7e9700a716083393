//! Map restart event.
//!
//! A map restart clears every effect entity and declares the configured effect
//! resource again, which is what makes an effect changed by a reload usable.
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct RestartMapEvent {}
