//! Bullets: straight-line projectiles fired by the player.
//!
//! A bullet is position + velocity and nothing else; it flies until it hits a
//! meteor (resolved in [`crate::session`]) or drifts far enough off screen to
//! be culled.  The set of live `Bullet` entities *is* the bullet registry —
//! the resolution system scans a query snapshot of them, so every live bullet
//! is examined exactly once per check.

use crate::collision::{Collidable, CollisionRect};
use crate::config::GameConfig;
use crate::constants::{BULLET_EXTENT, BULLET_MARGIN};
use crate::motion::{is_far_offscreen, Position, Velocity};
use bevy::prelude::*;

/// Marker component for a live bullet.
#[derive(Component, Debug, Default)]
pub struct Bullet;

impl Collidable for Bullet {
    fn collision_rect(&self, position: Vec2) -> CollisionRect {
        CollisionRect::around(position, Vec2::splat(BULLET_EXTENT), BULLET_MARGIN)
    }
}

/// Advance every bullet by its velocity, unconditionally.
pub fn bullet_move_system(mut query: Query<(&mut Position, &Velocity), With<Bullet>>) {
    for (mut position, velocity) in &mut query {
        position.0 += velocity.0;
    }
}

/// Cull bullets that have left the screen by more than the configured margin.
///
/// Bullets never wrap, so without this they would accumulate for the lifetime
/// of the session.
pub fn bullet_despawn_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<(Entity, &Position), With<Bullet>>,
) {
    for (entity, position) in &query {
        if is_far_offscreen(position.0, config.offscreen_margin) {
            commands.entity(entity).despawn();
        }
    }
}
