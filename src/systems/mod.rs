//! Observers handling host commands.
//!
//! Submodules overview
//! - [`fire`] – run the spawn dispatcher against the ECS world
//! - [`precache`] – declare effect resources, handle map restarts
//! - [`reloadconfig`] – hot-reload the particle configuration

pub mod fire;
pub mod precache;
pub mod reloadconfig;
