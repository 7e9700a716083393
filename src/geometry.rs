//! Spawn geometry.
//!
//! Pure functions mapping an avatar [`Pose`] and a [`SpawnPattern`] to the
//! ordered list of world positions where effects should appear. Nothing here
//! touches the world or keeps state between calls, so identical inputs always
//! produce bit-identical outputs.
//!
//! # Coordinate System
//!
//! - Positions share the avatar's reference frame; no extra transform.
//! - Yaw is given in degrees and rotates in the XY plane (0° = +X, 90° = +Y).
//! - Z is up.

use std::f32::consts::TAU;

use arrayvec::ArrayVec;
use glam::Vec3;

use crate::pattern::SpawnPattern;

/// Upper bound on the number of positions any pattern yields.
pub const MAX_SPAWN_POSITIONS: usize = 5;

/// Distance of the front spawn, and radius of the circle.
pub const FRONT_DISTANCE: f32 = 100.0;
/// Height offset of the above spawn.
pub const ABOVE_HEIGHT: f32 = 50.0;
pub const CIRCLE_RADIUS: f32 = 100.0;
pub const CIRCLE_COUNT: usize = 5;
/// Total length of the line; split into `LINE_COUNT` equal steps.
pub const LINE_LENGTH: f32 = 100.0;
pub const LINE_COUNT: usize = 5;

/// Positions produced for one invocation.
pub type SpawnPositions = ArrayVec<Vec3, MAX_SPAWN_POSITIONS>;

/// Snapshot of an avatar's position and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub origin: Vec3,
    /// Heading in degrees. `None` when the host cannot read the orientation.
    pub yaw_degrees: Option<f32>,
}

impl Pose {
    pub fn new(origin: Vec3, yaw_degrees: f32) -> Self {
        Self {
            origin,
            yaw_degrees: Some(yaw_degrees),
        }
    }

    /// A pose whose orientation is unknown.
    pub fn without_yaw(origin: Vec3) -> Self {
        Self {
            origin,
            yaw_degrees: None,
        }
    }

    /// Unit heading vector in the XY plane, if the yaw is known.
    pub fn heading(&self) -> Option<Vec3> {
        self.yaw_degrees.map(|deg| {
            let yaw = deg.to_radians();
            Vec3::new(yaw.cos(), yaw.sin(), 0.0)
        })
    }
}

/// Compute spawn positions for `pattern` around `pose`.
///
/// Returns an empty list when the pose is unavailable, or when the pattern
/// needs a heading and the pose has none. Callers treat an empty list as
/// "no spawn", not as an error.
pub fn spawn_positions(pose: Option<&Pose>, pattern: SpawnPattern) -> SpawnPositions {
    let mut out = SpawnPositions::new();
    let Some(pose) = pose else {
        return out;
    };
    let origin = pose.origin;

    match pattern {
        SpawnPattern::Front => {
            if let Some(dir) = pose.heading() {
                out.push(origin + dir * FRONT_DISTANCE);
            }
        }
        SpawnPattern::Feet => out.push(origin),
        SpawnPattern::Above => out.push(origin + Vec3::Z * ABOVE_HEIGHT),
        SpawnPattern::Circle => {
            for i in 0..CIRCLE_COUNT {
                let angle = TAU * i as f32 / CIRCLE_COUNT as f32;
                out.push(Vec3::new(
                    origin.x + angle.cos() * CIRCLE_RADIUS,
                    origin.y + angle.sin() * CIRCLE_RADIUS,
                    origin.z,
                ));
            }
        }
        SpawnPattern::Line => {
            if let Some(dir) = pose.heading() {
                let step = LINE_LENGTH / LINE_COUNT as f32;
                // First point one step out; none at the avatar itself.
                for i in 1..=LINE_COUNT {
                    out.push(origin + dir * (step * i as f32));
                }
            }
        }
    }

    out
}
