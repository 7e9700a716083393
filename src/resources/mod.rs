//! ECS resources made available to systems.
//!
//! Overview
//! - `configstore` – the active particle configuration, swapped on reload
//! - `output` – channel carrying console and chat lines out of the world
//! - `particleconfig` – the configuration record and its JSON format
//! - `precache` – effect resources declared for the current map
pub mod configstore;
pub mod output;
pub mod particleconfig;
pub mod precache;
