//! Degree-based 2D vector helpers on top of [`Vec2`].
//!
//! The game state lives in a y-down screen space (origin top-left), and all
//! angles in gameplay code are degrees.  These helpers keep that convention in
//! one place; everything else is plain `Vec2` arithmetic.

use bevy::prelude::*;

/// Magnitudes below this are treated as zero when normalizing.
pub const MIN_MAGNITUDE: f32 = 1e-9;

/// Rotate `v` counter-clockwise by `degrees` (standard math convention).
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector in the direction of `v`, or `Vec2::ZERO` when the magnitude is
/// below [`MIN_MAGNITUDE`].
///
/// Tighter threshold than `Vec2::normalize_or_zero`, which bails out well
/// above 1e-9.
pub fn normalize_or_zero_strict(v: Vec2) -> Vec2 {
    let length = v.length();
    if length < MIN_MAGNITUDE {
        Vec2::ZERO
    } else {
        v / length
    }
}

/// Unit heading for a ship at `rotation_degrees`.
///
/// The 270° offset makes a rotation of 0° point "up" in the y-down screen
/// space; positive rotation swings the heading toward +x (clockwise as seen
/// on screen, since +y points down).
pub fn heading_from_rotation(rotation_degrees: f32) -> Vec2 {
    let theta = (270.0 + rotation_degrees).to_radians();
    Vec2::new(theta.cos(), theta.sin())
}
