//! Aberred Particles library.
//!
//! Spawns particle effects around a player's avatar using one of five
//! geometric patterns chosen by a hot-reloadable JSON config.
//!
//! The core ([`pattern`], [`geometry`], [`dispatcher`], [`reload`]) talks to
//! the host through narrow traits. The ECS host ([`components`], [`events`],
//! [`resources`], [`systems`], [`game`], [`console`]) implements them on top of
//! `bevy_ecs` for the headless server binary and the integration tests.

pub mod components;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod pattern;
pub mod reload;
pub mod resources;
pub mod systems;
