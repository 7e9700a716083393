//! Command events and their payloads.
//!
//! Each host command is an event; observers in [`crate::systems`] react to
//! them.
//!
//! Submodules:
//! - [`fire`] – spawn the configured pattern around an actor
//! - [`reloadconfig`] – re-read the particle configuration file
//! - [`restartmap`] – clear effects and precache the configured effect again
pub mod fire;
pub mod reloadconfig;
pub mod restartmap;
