//! ECS components for entities.
//!
//! Submodules overview:
//! - [`avatar`] – player-controlled body and the player's [`avatar::ActorId`]
//! - [`particleeffect`] – spawned effect entities and their active marker
//! - [`rotation`] – heading in degrees
//! - [`worldposition`] – world-space 3D position

pub mod avatar;
pub mod particleeffect;
pub mod rotation;
pub mod worldposition;
