//! Player ship: components, input intent, movement, and firing.
//!
//! ## Pipeline (runs in order every gameplay tick)
//!
//! 1. [`player_intent_clear_system`] — resets [`PlayerIntent`] to neutral.
//! 2. [`keyboard_to_intent_system`] — translates arrow keys + Space into
//!    `PlayerIntent` fields.
//! 3. [`player_control_system`] — applies rotation/thrust, wraps toroidally,
//!    integrates position.
//! 4. [`player_fire_system`] — advances the fire cooldown while the trigger is
//!    held and emits a bullet when it comes ready.
//!
//! The **input abstraction layer** (`PlayerIntent`) makes the movement logic
//! fully testable: tests populate the resource directly and run only the
//! systems under test.

use crate::bullet::Bullet;
use crate::collision::{Collidable, CollisionRect};
use crate::config::GameConfig;
use crate::constants::{
    FIRE_COOLDOWN_MS, PLAYER_EXTENT, PLAYER_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::cooldown::Cooldown;
use crate::motion::{Position, RotationDegrees, Velocity};
use crate::vector::heading_from_rotation;
use bevy::prelude::*;
use std::time::Duration;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Player;

impl Collidable for Player {
    fn collision_rect(&self, position: Vec2) -> CollisionRect {
        CollisionRect::around(position, Vec2::splat(PLAYER_EXTENT), PLAYER_MARGIN)
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Remaining lives.  Decremented on meteor contact; restored to the configured
/// count by the session's full reset.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLives(pub u32);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(crate::constants::PLAYER_LIVES)
    }
}

/// Enforces a minimum interval between consecutive shots.
///
/// The counter only advances while the fire input is held, so tapping the
/// trigger slower than the cooldown does not bank up free shots.
#[derive(Resource, Debug, Clone)]
pub struct FireCooldown(pub Cooldown);

impl Default for FireCooldown {
    fn default() -> Self {
        Self(Cooldown::new(Duration::from_millis(FIRE_COOLDOWN_MS)))
    }
}

// ── Input abstraction ─────────────────────────────────────────────────────────

/// Aggregated player intent for the current tick, derived from all input
/// sources.
///
/// Input systems write to this resource each tick after it is cleared;
/// gameplay systems only read it.  Tests can populate this directly to drive
/// the ship without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIntent {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

// ── Spawning and resets ───────────────────────────────────────────────────────

/// Logical position that centers the player sprite on the screen.
pub fn centered_spawn_position() -> Vec2 {
    Vec2::new(
        SCREEN_WIDTH / 2.0 - PLAYER_EXTENT / 2.0,
        SCREEN_HEIGHT / 2.0 - PLAYER_EXTENT / 2.0,
    )
}

/// Spawn the player ship at the screen center, at rest, facing up.
pub fn spawn_player(commands: &mut Commands) {
    commands.spawn((
        Player,
        Position(centered_spawn_position()),
        Velocity::default(),
        RotationDegrees::default(),
    ));
}

/// Life-loss reset: recenter and stop the ship, facing up again.
///
/// Note the reset position is the raw screen center, not the sprite-centered
/// spawn point — the respawned ship sits half a sprite off from where it
/// started the session.  Contract-wise this only touches the ship: clearing
/// meteors and bullets is the session's explicit job.
pub fn reset_player(position: &mut Position, velocity: &mut Velocity, rotation: &mut RotationDegrees) {
    position.0 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    velocity.0 = Vec2::ZERO;
    rotation.0 = 0.0;
}

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Reset [`PlayerIntent`] to neutral at the start of every tick.
///
/// Must run before any system that writes to the intent.
pub fn player_intent_clear_system(mut intent: ResMut<PlayerIntent>) {
    *intent = PlayerIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate held keys into [`PlayerIntent`].
///
/// - **←** → `rotate_left`
/// - **→** → `rotate_right`
/// - **↑** → `thrust`
/// - **Space** → `fire`
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    if keys.pressed(KeyCode::ArrowLeft) {
        intent.rotate_left = true;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        intent.rotate_right = true;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        intent.thrust = true;
    }
    if keys.pressed(KeyCode::Space) {
        intent.fire = true;
    }
}

// ── Step 3: Movement ──────────────────────────────────────────────────────────

/// Wrap a logical position toroidally: crossing any screen edge teleports to
/// the opposite edge.  Strict comparisons — a position exactly on the boundary
/// stays put.
pub fn wrap_position(position: Vec2) -> Vec2 {
    let mut wrapped = position;
    if wrapped.x > SCREEN_WIDTH {
        wrapped.x = 0.0;
    }
    if wrapped.x < 0.0 {
        wrapped.x = SCREEN_WIDTH;
    }
    if wrapped.y > SCREEN_HEIGHT {
        wrapped.y = 0.0;
    }
    if wrapped.y < 0.0 {
        wrapped.y = SCREEN_HEIGHT;
    }
    wrapped
}

/// Apply rotation and thrust from the intent, wrap, then integrate position.
///
/// Wrapping runs before integration, so the ship spends one tick beyond the
/// edge before teleporting — matching the reference handling feel.
pub fn player_control_system(
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Position, &mut Velocity, &mut RotationDegrees), With<Player>>,
) {
    let Ok((mut position, mut velocity, mut rotation)) = query.single_mut() else {
        return;
    };

    if intent.rotate_left {
        rotation.0 += config.rotation_speed;
    }
    if intent.rotate_right {
        rotation.0 -= config.rotation_speed;
    }
    if intent.thrust {
        velocity.0 += heading_from_rotation(rotation.0) * config.thrust_acceleration;
    }

    position.0 = wrap_position(position.0);
    position.0 += velocity.0;
}

// ── Step 4: Firing ────────────────────────────────────────────────────────────

/// Advance the fire cooldown while the trigger is held; when it comes ready,
/// reset it and emit one bullet that inherits the ship's momentum.
pub fn player_fire_system(
    mut commands: Commands,
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    time: Res<Time>,
    mut cooldown: ResMut<FireCooldown>,
    query: Query<(&Position, &Velocity, &RotationDegrees), With<Player>>,
) {
    if !intent.fire {
        return;
    }
    let Ok((position, velocity, rotation)) = query.single() else {
        return;
    };

    cooldown.0.update(time.delta());
    if !cooldown.0.is_ready() {
        return;
    }
    cooldown.0.reset();

    let muzzle_velocity = heading_from_rotation(rotation.0) * config.bullet_speed + velocity.0;
    commands.spawn((Bullet, Position(position.0), Velocity(muzzle_velocity)));
}

// ── Unit tests ────────────────────────────────────────────────────────────────
