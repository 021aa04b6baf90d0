//! The per-tick game loop: system ordering, scoring, and both restart paths.
//!
//! ## Tick body (FixedUpdate, only in `GameState::Playing`)
//!
//! | Step | System | Purpose |
//! |------|--------|---------|
//! | 1 | `player_intent_clear_system` → `keyboard_to_intent_system` | sample input |
//! | 2 | `player_control_system` | rotate / thrust / wrap / integrate |
//! | 3 | `player_fire_system` | cooldown-gated bullet emission |
//! | 4 | [`zero_lives_reset_system`] | full session restart once lives hit 0 |
//! | 5 | `meteor_spawn_system` | timer-gated big-meteor spawn |
//! | 6 | `meteor_move_system`, `bullet_move_system` | advance everything |
//! | 7 | [`collision_resolution_system`] | player/bullet vs meteor resolution |
//! | 8 | `bullet_despawn_system`, `meteor_despawn_system` | off-screen culling |
//!
//! Two restart paths deliberately coexist (they overlap on the tick the last
//! life is lost, and the order is observable): a meteor touching the player
//! triggers a **partial** reset inside resolution — life lost, field wiped,
//! score kept — while the zero-lives check at the top of the next tick
//! triggers the **full** reset that restores lives and zeroes the score.

use crate::bullet::{self, Bullet};
use crate::collision::Collidable;
use crate::config::GameConfig;
use crate::constants::TICK_HZ;
use crate::cooldown::Cooldown;
use crate::menu::GameState;
use crate::meteor::{self, spawn_split_meteors, Meteor, MeteorSpawnTimer};
use crate::motion::{Position, RotationDegrees, Velocity};
use crate::player::{
    self, centered_spawn_position, reset_player, spawn_player, FireCooldown, Player, PlayerLives,
};
use bevy::ecs::schedule::ScheduleConfigs;
use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Accumulated session score.  +100 per big meteor, +50 per small; zeroed by
/// the full reset.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(pub u32);

// ── Session setup ─────────────────────────────────────────────────────────────

/// Start a fresh session: ship at the center, full lives, zero score, both
/// cooldown gates cold.  Runs once when leaving the main menu.
pub fn setup_session(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(Score(0));
    commands.insert_resource(PlayerLives(config.player_lives));
    commands.insert_resource(FireCooldown(Cooldown::new(Duration::from_millis(
        config.fire_cooldown_ms,
    ))));
    commands.insert_resource(MeteorSpawnTimer(Cooldown::new(Duration::from_millis(
        config.meteor_spawn_interval_ms,
    ))));
    spawn_player(&mut commands);
    info!("session started");
}

// ── Step 4: full restart ──────────────────────────────────────────────────────

/// Once the player is out of lives, restart the whole session in place: fresh
/// ship at the spawn point, lives and fire cooldown restored, every meteor and
/// bullet gone, score back to zero.
pub fn zero_lives_reset_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut lives: ResMut<PlayerLives>,
    mut fire_cooldown: ResMut<FireCooldown>,
    meteors: Query<Entity, With<Meteor>>,
    bullets: Query<Entity, With<Bullet>>,
    mut player: Query<(&mut Position, &mut Velocity, &mut RotationDegrees), With<Player>>,
) {
    if lives.0 > 0 {
        return;
    }

    info!("game over at score {}; restarting session", score.0);
    lives.0 = config.player_lives;
    score.0 = 0;
    fire_cooldown.0.reset();

    for entity in &meteors {
        commands.entity(entity).despawn();
    }
    for entity in &bullets {
        commands.entity(entity).despawn();
    }

    if let Ok((mut position, mut velocity, mut rotation)) = player.single_mut() {
        reset_player(&mut position, &mut velocity, &mut rotation);
        position.0 = centered_spawn_position();
    }
}

// ── Step 7: collision resolution ──────────────────────────────────────────────

/// Resolve player-vs-meteor and bullet-vs-meteor contacts for this tick.
///
/// Iterates a snapshot of the live meteors.  For each one:
///
/// 1. If its hit box touches the player's, the player loses a life and is
///    recentered, and the whole field (meteors and bullets) is wiped — score
///    and remaining lives survive.  Later snapshot entries are still checked
///    against the respawned player, so two overlapping meteors can cost two
///    lives in one tick.
/// 2. Otherwise the live bullets are scanned against it.  The scan walks a
///    snapshot and despawns through deferred [`Commands`], so every live
///    bullet is tested exactly once per call — no index-shifting skips.  Any
///    hit removes the meteor; a big one is replaced by two split smalls and
///    scores 100, a small scores 50.
///
/// A scan with zero live bullets is a no-op.
pub fn collision_resolution_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut lives: ResMut<PlayerLives>,
    meteors: Query<(Entity, &Position, &Velocity, &Meteor), Without<Player>>,
    bullets: Query<(Entity, &Position, &Bullet), Without<Player>>,
    mut player: Query<
        (&mut Position, &mut Velocity, &mut RotationDegrees, &Player),
        (Without<Meteor>, Without<Bullet>),
    >,
) {
    let Ok((mut player_pos, mut player_vel, mut player_rot, player_marker)) = player.single_mut()
    else {
        return;
    };

    // Snapshot of the live bullets; entries are removed as they hit.
    let mut live_bullets: Vec<_> = bullets
        .iter()
        .map(|(entity, position, bullet)| (entity, bullet.collision_rect(position.0)))
        .collect();
    // Set once a player contact has wiped the field this tick.
    let mut field_wiped = false;
    // Meteors already despawned by a bullet hit earlier in the scan; the wipe
    // must not queue a second despawn for them.
    let mut destroyed_meteors: Vec<Entity> = Vec::new();

    for (meteor_entity, meteor_pos, meteor_vel, meteor) in &meteors {
        let meteor_rect = meteor.collision_rect(meteor_pos.0);

        if meteor_rect.intersects(&player_marker.collision_rect(player_pos.0)) {
            lives.0 = lives.0.saturating_sub(1);
            reset_player(&mut player_pos, &mut player_vel, &mut player_rot);
            info!("meteor hit the ship; {} lives left", lives.0);

            if !field_wiped {
                for (entity, _, _, _) in &meteors {
                    if !destroyed_meteors.contains(&entity) {
                        commands.entity(entity).despawn();
                    }
                }
                for (entity, _) in live_bullets.drain(..) {
                    commands.entity(entity).despawn();
                }
                field_wiped = true;
            }
        }

        // The wipe emptied the field; nothing left for bullets to hit.
        if field_wiped {
            continue;
        }

        let mut shot_down = false;
        live_bullets.retain(|(bullet_entity, bullet_rect)| {
            if bullet_rect.intersects(&meteor_rect) {
                commands.entity(*bullet_entity).despawn();
                shot_down = true;
                false
            } else {
                true
            }
        });

        if shot_down {
            commands.entity(meteor_entity).despawn();
            destroyed_meteors.push(meteor_entity);
            if meteor.is_big() {
                score.0 += config.big_meteor_score;
                let split_degrees = rand::thread_rng()
                    .gen_range(config.split_angle_min..config.split_angle_max);
                spawn_split_meteors(
                    &mut commands,
                    meteor_pos.0,
                    meteor,
                    meteor_vel.0,
                    split_degrees,
                );
            } else {
                score.0 += config.small_meteor_score;
            }
        }
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// The ordered tick body.  Exposed as a function so headless tests can run the
/// exact production ordering in a plain `Update` schedule.
pub fn gameplay_systems() -> ScheduleConfigs<ScheduleSystem> {
    (
        player::player_intent_clear_system,
        player::keyboard_to_intent_system,
        player::player_control_system,
        player::player_fire_system,
        zero_lives_reset_system,
        meteor::meteor_spawn_system,
        meteor::meteor_move_system,
        bullet::bullet_move_system,
        collision_resolution_system,
        bullet::bullet_despawn_system,
        meteor::meteor_despawn_system,
    )
        .chain()
}

/// Registers the session resources and the fixed-timestep tick body.
///
/// Requires [`GameState`] to be registered first (the menu plugin does that).
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .init_resource::<PlayerLives>()
            .init_resource::<GameConfig>()
            .init_resource::<player::PlayerIntent>()
            .init_resource::<FireCooldown>()
            .init_resource::<MeteorSpawnTimer>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(OnExit(GameState::MainMenu), setup_session)
            .add_systems(
                FixedUpdate,
                gameplay_systems().run_if(in_state(GameState::Playing)),
            );
    }
}
