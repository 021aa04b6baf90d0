//! Meteors: procedural spawning at the screen edge, drift toward the center,
//! and the big→small split triggered when a big meteor is shot down.
//!
//! Big meteors spawn on a ring of radius half the screen width around the
//! screen center, aimed inward with a random speed.  A destroyed big meteor
//! yields exactly two smalls at its position, the parent velocity fanned out
//! by a random ±[10°, 45°) — momentum direction is preserved on average while
//! the pair diverges.  Smalls are terminal: they never split further.

use crate::collision::{Collidable, CollisionRect};
use crate::config::GameConfig;
use crate::constants::{
    METEOR_BIG_EXTENT, METEOR_MARGIN, METEOR_OFFSCREEN_MARGIN, METEOR_SMALL_EXTENT,
    METEOR_SPAWN_INTERVAL_MS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::cooldown::Cooldown;
use crate::motion::{is_far_offscreen, Position, Velocity};
use crate::vector::{normalize_or_zero_strict, rotate_degrees};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

// ── Components ────────────────────────────────────────────────────────────────

/// The two meteor size variants.  Only `Big` splits on destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeteorSize {
    Big,
    Small,
}

impl MeteorSize {
    /// Sprite extent (width = height) for this size.
    pub fn extent(self) -> f32 {
        match self {
            MeteorSize::Big => METEOR_BIG_EXTENT,
            MeteorSize::Small => METEOR_SMALL_EXTENT,
        }
    }
}

/// A drifting meteor.
#[derive(Component, Debug, Clone)]
pub struct Meteor {
    pub size: MeteorSize,
    /// Ring angle this meteor (or its big parent) spawned at, in radians.
    pub spawn_angle: f32,
}

impl Meteor {
    pub fn is_big(&self) -> bool {
        self.size == MeteorSize::Big
    }
}

impl Collidable for Meteor {
    fn collision_rect(&self, position: Vec2) -> CollisionRect {
        CollisionRect::around(position, Vec2::splat(self.size.extent()), METEOR_MARGIN)
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Gate between big-meteor spawns.
#[derive(Resource, Debug, Clone)]
pub struct MeteorSpawnTimer(pub Cooldown);

impl Default for MeteorSpawnTimer {
    fn default() -> Self {
        Self(Cooldown::new(Duration::from_millis(METEOR_SPAWN_INTERVAL_MS)))
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn point and inbound velocity for a big meteor entering at ring angle
/// `spawn_angle` (radians) with the given speed.
///
/// The ring has radius `SCREEN_WIDTH / 2` around the screen center, so spawn
/// points on the horizontal axis sit exactly at the side edges while the rest
/// of the ring lies outside the top and bottom edges.
pub fn big_meteor_trajectory(spawn_angle: f32, speed: f32) -> (Vec2, Vec2) {
    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    let radius = SCREEN_WIDTH / 2.0;
    let spawn_point = center + radius * Vec2::new(spawn_angle.cos(), spawn_angle.sin());
    let direction = normalize_or_zero_strict(center - spawn_point);
    (spawn_point, direction * speed)
}

/// Advance the spawn gate; when it comes ready, reset it and send one big
/// meteor in from a random ring angle.
pub fn meteor_spawn_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    time: Res<Time>,
    mut timer: ResMut<MeteorSpawnTimer>,
) {
    timer.0.update(time.delta());
    if !timer.0.is_ready() {
        return;
    }
    timer.0.reset();

    let mut rng = rand::thread_rng();
    let spawn_angle = rng.gen_range(0.0..TAU);
    let speed = rng.gen_range(config.meteor_speed_min..config.meteor_speed_max);
    let (spawn_point, velocity) = big_meteor_trajectory(spawn_angle, speed);

    commands.spawn((
        Meteor {
            size: MeteorSize::Big,
            spawn_angle,
        },
        Position(spawn_point),
        Velocity(velocity),
    ));
}

// ── Splitting ─────────────────────────────────────────────────────────────────

/// Fan a destroyed big meteor's velocity into the two small-meteor velocities:
/// the parent velocity rotated by `+split_degrees` and `−split_degrees`.
pub fn split_velocities(parent_velocity: Vec2, split_degrees: f32) -> (Vec2, Vec2) {
    (
        rotate_degrees(parent_velocity, split_degrees),
        rotate_degrees(parent_velocity, -split_degrees),
    )
}

/// Spawn the two small meteors a destroyed big one breaks into.
///
/// Both smalls sit at the parent's position and keep its `spawn_angle`; the
/// caller draws `split_degrees` (uniform in the configured range during play,
/// pinned in tests).
pub fn spawn_split_meteors(
    commands: &mut Commands,
    position: Vec2,
    parent: &Meteor,
    parent_velocity: Vec2,
    split_degrees: f32,
) {
    let (first, second) = split_velocities(parent_velocity, split_degrees);
    for velocity in [first, second] {
        commands.spawn((
            Meteor {
                size: MeteorSize::Small,
                spawn_angle: parent.spawn_angle,
            },
            Position(position),
            Velocity(velocity),
        ));
    }
}

// ── Movement and culling ──────────────────────────────────────────────────────

/// Pure translation by velocity — meteors never wrap.
pub fn meteor_move_system(mut query: Query<(&mut Position, &Velocity), With<Meteor>>) {
    for (mut position, velocity) in &mut query {
        position.0 += velocity.0;
    }
}

/// Cull meteors that have drifted past the cull band.
///
/// The band is the configured off-screen margin floored at
/// [`METEOR_OFFSCREEN_MARGIN`]: the spawn ring overshoots the top and bottom
/// screen edges by 350 units, so a smaller band would delete a fresh spawn on
/// the same tick it appeared.
pub fn meteor_despawn_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<(Entity, &Position), With<Meteor>>,
) {
    let margin = config.offscreen_margin.max(METEOR_OFFSCREEN_MARGIN);
    for (entity, position) in &query {
        if is_far_offscreen(position.0, margin) {
            commands.entity(entity).despawn();
        }
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
