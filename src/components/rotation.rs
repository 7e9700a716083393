use bevy_ecs::prelude::Component;

/// Heading around the Z axis, in degrees.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}
