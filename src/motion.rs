//! Spatial components shared by every moving entity.
//!
//! Gameplay state lives in a **logical screen space**: origin at the top-left
//! corner, +y pointing down, 1600×900 units, positions naming a sprite's
//! top-left corner.  Rendering is the only place that knows about Bevy's
//! centered, y-up world — [`crate::rendering::sync_transforms`] performs the
//! flip once per frame.  Keeping the logical space here means every gameplay
//! system runs headless.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::prelude::*;

/// Top-left corner of the entity's sprite in logical screen space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Displacement applied to [`Position`] once per tick, in units per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Ship orientation in degrees; 0° points "up", positive swings the heading
/// toward +x (clockwise as seen on screen).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDegrees(pub f32);

/// Whether a logical position is further outside the screen than `margin`.
///
/// Used to cull bullets and meteors, neither of which wraps — without culling
/// they would accumulate for the lifetime of the session.
pub fn is_far_offscreen(position: Vec2, margin: f32) -> bool {
    position.x < -margin
        || position.x > SCREEN_WIDTH + margin
        || position.y < -margin
        || position.y > SCREEN_HEIGHT + margin
}
