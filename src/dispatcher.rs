//! Spawn dispatcher.
//!
//! Turns a fire request into effect entities: reads the active config,
//! resolves the pattern, asks the geometry engine for positions, and issues
//! one create/place/activate sequence per position.
//!
//! The world model and the entity API are reached through two narrow traits,
//! [`AvatarPoses`] and [`EffectEntities`], so the dispatcher runs the same way
//! against the ECS host and against test doubles. Player-facing text goes
//! through [`Feedback`] and is only produced when `debug_enabled` is set.
//!
//! # Failure handling
//!
//! - Absent or dead avatar: nothing is spawned.
//! - Out-of-range `spawnMethod`: the front pattern is used.
//! - Pose unavailable: nothing is spawned.
//! - One position fails: the others are still attempted.

use glam::Vec3;
use log::debug;

use crate::components::avatar::ActorId;
use crate::error::ParticleError;
use crate::geometry::{Pose, spawn_positions};
use crate::pattern::SpawnPattern;
use crate::resources::configstore::ConfigStore;

/// Orientation given to every spawned effect (pitch, yaw, roll).
pub const EFFECT_ORIENTATION: Vec3 = Vec3::ZERO;

/// Read access to avatar state.
pub trait AvatarPoses {
    /// Whether `actor` names a valid avatar that is alive.
    fn is_alive(&self, actor: ActorId) -> bool;
    /// Current pose of the avatar, if the host can read it.
    fn pose(&self, actor: ActorId) -> Option<Pose>;
}

/// Host entity API for effect entities.
///
/// Each method returns a reason string when the host declines.
pub trait EffectEntities {
    type Handle: Copy;

    fn create_effect(&mut self, effect: &str) -> Result<Self::Handle, String>;
    fn place(&mut self, handle: Self::Handle, position: Vec3, orientation: Vec3) -> Result<(), String>;
    fn activate(&mut self, handle: Self::Handle) -> Result<(), String>;

    /// Drop an effect that was created but could not be placed or started.
    fn discard(&mut self, _handle: Self::Handle) {}
}

/// Operator console and per-player chat.
pub trait Feedback {
    fn console(&mut self, text: &str);
    fn chat(&mut self, actor: ActorId, text: &str);
}

impl<F: Feedback> Feedback for Option<F> {
    fn console(&mut self, text: &str) {
        if let Some(inner) = self {
            inner.console(text);
        }
    }

    fn chat(&mut self, actor: ActorId, text: &str) {
        if let Some(inner) = self {
            inner.chat(actor, text);
        }
    }
}

/// How far a fire request got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Actor absent, invalid, or dead.
    Rejected,
    /// The avatar had no usable pose for the pattern.
    NoPose,
    /// Every position was attempted.
    Completed,
}

/// Result of one [`SpawnDispatcher::fire`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct FireReport {
    pub actor: Option<ActorId>,
    pub pattern: SpawnPattern,
    pub outcome: FireOutcome,
    /// Positions for which a spawn was requested.
    pub attempted: usize,
    /// Positions whose effect was created, placed and activated.
    pub spawned: usize,
    /// Every diagnostic recorded along the way, in order.
    pub errors: Vec<ParticleError>,
}

impl FireReport {
    fn new(actor: Option<ActorId>) -> Self {
        Self {
            actor,
            pattern: SpawnPattern::default(),
            outcome: FireOutcome::Rejected,
            attempted: 0,
            spawned: 0,
            errors: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.spawned
    }

    /// One-line summary for the console.
    pub fn summary(&self) -> String {
        match self.outcome {
            FireOutcome::Rejected => "Fire rejected: player invalid or not alive".to_string(),
            FireOutcome::NoPose => format!("Fire skipped ({}): no pose available", self.pattern.name()),
            FireOutcome::Completed => format!(
                "Fired {} pattern: {}/{} particles spawned",
                self.pattern.name(),
                self.spawned,
                self.attempted
            ),
        }
    }
}

/// Dispatches fire requests against a world model and an entity API.
pub struct SpawnDispatcher<P, E> {
    poses: P,
    entities: E,
}

impl<P: AvatarPoses, E: EffectEntities> SpawnDispatcher<P, E> {
    pub fn new(poses: P, entities: E) -> Self {
        Self { poses, entities }
    }

    pub fn entities(&self) -> &E {
        &self.entities
    }

    pub fn into_parts(self) -> (P, E) {
        (self.poses, self.entities)
    }

    /// Spawn the configured pattern around `actor`'s avatar.
    pub fn fire(
        &mut self,
        store: &ConfigStore,
        actor: Option<ActorId>,
        feedback: &mut impl Feedback,
    ) -> FireReport {
        let config = store.current();
        let verbose = config.debug_enabled;
        let mut report = FireReport::new(actor);

        let Some(actor) = actor.filter(|a| self.poses.is_alive(*a)) else {
            let err = ParticleError::AvatarUnavailable;
            debug!("fire rejected for {:?}: {}", report.actor, err);
            if verbose {
                feedback.console(&format!("ERROR: {}", err));
            }
            report.errors.push(err);
            return report;
        };

        let (pattern, selector_error) = SpawnPattern::resolve(config.spawn_method);
        report.pattern = pattern;
        if let Some(err) = selector_error {
            if verbose {
                feedback.console(&format!("ERROR: {}", err));
                feedback.chat(actor, err.chat_text());
            }
            report.errors.push(err);
        }

        let pose = self.poses.pose(actor);
        let positions = spawn_positions(pose.as_ref(), pattern);
        if positions.is_empty() {
            let err = ParticleError::AvatarUnavailable;
            report.outcome = FireOutcome::NoPose;
            debug!("no pose for {} ({} pattern)", actor, pattern.name());
            if verbose {
                feedback.console(&report.summary());
                feedback.chat(actor, err.chat_text());
            }
            report.errors.push(err);
            return report;
        }

        for position in positions {
            report.attempted += 1;
            match self.spawn_one(&config.effect_identifier, position) {
                Ok(()) => {
                    report.spawned += 1;
                    debug!("spawned {} at {}", config.effect_identifier, position);
                }
                Err(reason) => {
                    let err = ParticleError::EntityCreationFailed { position, reason };
                    if verbose {
                        feedback.console(&format!("ERROR: {}", err));
                    }
                    report.errors.push(err);
                }
            }
        }
        report.outcome = FireOutcome::Completed;

        if verbose {
            feedback.console(&report.summary());
            if report.failed() == 0 {
                feedback.chat(actor, "Particle spawned!");
            } else {
                feedback.chat(
                    actor,
                    &format!(
                        "Spawned {}/{} particles, {} failed!",
                        report.spawned,
                        report.attempted,
                        report.failed()
                    ),
                );
            }
        }

        report
    }

    fn spawn_one(&mut self, effect: &str, position: Vec3) -> Result<(), String> {
        let handle = self.entities.create_effect(effect)?;
        let started = self
            .entities
            .place(handle, position, EFFECT_ORIENTATION)
            .and_then(|()| self.entities.activate(handle));
        if started.is_err() {
            self.entities.discard(handle);
        }
        started
    }
}
