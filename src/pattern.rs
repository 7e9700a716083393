//! Spawn pattern selection.
//!
//! The configuration stores the pattern as a raw integer (`spawnMethod`).
//! [`SpawnPattern::resolve`] turns any integer into a pattern and never fails:
//! values outside `1..=5` fall back to [`SpawnPattern::Front`] and come back
//! with an [`ParticleError::InvalidPatternSelector`] diagnostic for the caller
//! to surface (or not).
//!
//! | method | pattern  | positions |
//! |--------|----------|-----------|
//! | 1      | `Front`  | 1         |
//! | 2      | `Feet`   | 1         |
//! | 3      | `Above`  | 1         |
//! | 4      | `Circle` | 5         |
//! | 5      | `Line`   | 5         |

use crate::error::ParticleError;

/// One of the five placement algorithms of the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpawnPattern {
    /// 100 units in front of the avatar along its yaw.
    #[default]
    Front,
    /// At the avatar's origin.
    Feet,
    /// 50 units above the avatar's origin.
    Above,
    /// Five points on a 100-unit circle around the avatar.
    Circle,
    /// Five points along the yaw direction, 20 units apart.
    Line,
}

impl SpawnPattern {
    /// All patterns, ordered by their numeric method.
    pub const ALL: [SpawnPattern; 5] = [
        SpawnPattern::Front,
        SpawnPattern::Feet,
        SpawnPattern::Above,
        SpawnPattern::Circle,
        SpawnPattern::Line,
    ];

    /// Map a raw `spawnMethod` to a pattern, reporting out-of-range values.
    pub fn resolve(method: i32) -> (SpawnPattern, Option<ParticleError>) {
        match method {
            1 => (SpawnPattern::Front, None),
            2 => (SpawnPattern::Feet, None),
            3 => (SpawnPattern::Above, None),
            4 => (SpawnPattern::Circle, None),
            5 => (SpawnPattern::Line, None),
            other => (
                SpawnPattern::Front,
                Some(ParticleError::InvalidPatternSelector(other)),
            ),
        }
    }

    /// Same as [`resolve`](Self::resolve) without the diagnostic.
    pub fn from_method(method: i32) -> SpawnPattern {
        Self::resolve(method).0
    }

    /// Numeric encoding used in the configuration file.
    pub fn method(self) -> i32 {
        match self {
            SpawnPattern::Front => 1,
            SpawnPattern::Feet => 2,
            SpawnPattern::Above => 3,
            SpawnPattern::Circle => 4,
            SpawnPattern::Line => 5,
        }
    }

    /// Number of positions the pattern yields for an available pose.
    pub fn count(self) -> usize {
        match self {
            SpawnPattern::Front | SpawnPattern::Feet | SpawnPattern::Above => 1,
            SpawnPattern::Circle | SpawnPattern::Line => 5,
        }
    }

    /// Whether the pattern depends on the avatar's yaw.
    pub fn needs_yaw(self) -> bool {
        matches!(self, SpawnPattern::Front | SpawnPattern::Line)
    }

    pub fn name(self) -> &'static str {
        match self {
            SpawnPattern::Front => "front",
            SpawnPattern::Feet => "feet",
            SpawnPattern::Above => "above",
            SpawnPattern::Circle => "circle",
            SpawnPattern::Line => "line",
        }
    }
}
