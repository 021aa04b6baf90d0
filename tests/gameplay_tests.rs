//! Headless end-to-end scenarios for the gameplay tick body.
//!
//! No window, no renderer: entities carry only their logical components and
//! the systems under test run in a plain `Update` schedule, which keeps every
//! scenario deterministic (no reliance on wall-clock fixed-timestep
//! accumulation).

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use bevy::prelude::*;

use meteor_storm::bullet::Bullet;
use meteor_storm::config::GameConfig;
use meteor_storm::constants::{BIG_METEOR_SCORE, PLAYER_LIVES, SMALL_METEOR_SCORE};
use meteor_storm::cooldown::Cooldown;
use meteor_storm::meteor::{big_meteor_trajectory, Meteor, MeteorSize, MeteorSpawnTimer};
use meteor_storm::motion::{Position, RotationDegrees, Velocity};
use meteor_storm::player::{
    centered_spawn_position, FireCooldown, Player, PlayerIntent, PlayerLives,
};
use meteor_storm::session::{
    collision_resolution_system, gameplay_systems, zero_lives_reset_system, Score,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(Score(0));
    app.insert_resource(PlayerLives(PLAYER_LIVES));
    app.insert_resource(PlayerIntent::default());
    app.insert_resource(FireCooldown::default());
    app.insert_resource(MeteorSpawnTimer::default());
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app
}

fn spawn_player_at(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Position(position),
            Velocity(Vec2::ZERO),
            RotationDegrees(0.0),
        ))
        .id()
}

fn spawn_meteor(app: &mut App, size: MeteorSize, position: Vec2, velocity: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Meteor {
                size,
                spawn_angle: 0.0,
            },
            Position(position),
            Velocity(velocity),
        ))
        .id()
}

fn spawn_bullet(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((Bullet, Position(position), Velocity(Vec2::ZERO)))
        .id()
}

fn meteors(app: &mut App) -> Vec<(Meteor, Vec2, Vec2)> {
    let mut query = app
        .world_mut()
        .query::<(&Meteor, &Position, &Velocity)>();
    query
        .iter(app.world())
        .map(|(meteor, position, velocity)| (meteor.clone(), position.0, velocity.0))
        .collect()
}

fn bullet_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<Bullet>>();
    query.iter(app.world()).count()
}

fn score(app: &App) -> u32 {
    app.world().resource::<Score>().0
}

fn lives(app: &App) -> u32 {
    app.world().resource::<PlayerLives>().0
}

// ── Bullet vs meteor ──────────────────────────────────────────────────────────

#[test]
fn bullet_destroys_big_meteor_and_splits_it() {
    let mut app = build_app();
    // Ship parked in a corner, out of everything's way.
    spawn_player_at(&mut app, Vec2::new(10.0, 10.0));
    let parent_pos = Vec2::new(760.0, 400.0);
    let parent = spawn_meteor(&mut app, MeteorSize::Big, parent_pos, Vec2::new(1.0, 0.0));
    let bullet = spawn_bullet(&mut app, Vec2::new(790.0, 430.0));

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert!(app.world().get_entity(bullet).is_err(), "bullet must be consumed");
    assert!(app.world().get_entity(parent).is_err(), "big meteor must be destroyed");
    assert_eq!(score(&app), BIG_METEOR_SCORE);

    let survivors = meteors(&mut app);
    assert_eq!(survivors.len(), 2, "a destroyed big splits into exactly two");
    for (meteor, position, velocity) in &survivors {
        assert_eq!(meteor.size, MeteorSize::Small);
        assert_eq!(*position, parent_pos, "smalls spawn at the parent position");
        // Split preserves the parent speed while fanning the direction.
        assert!((velocity.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn bullet_destroys_small_meteor_without_split() {
    let mut app = build_app();
    spawn_player_at(&mut app, Vec2::new(10.0, 10.0));
    let target = spawn_meteor(
        &mut app,
        MeteorSize::Small,
        Vec2::new(760.0, 400.0),
        Vec2::new(0.5, 0.5),
    );
    spawn_bullet(&mut app, Vec2::new(770.0, 410.0));

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert!(app.world().get_entity(target).is_err());
    assert_eq!(score(&app), SMALL_METEOR_SCORE);
    assert!(meteors(&mut app).is_empty(), "smalls are terminal — no further split");
    assert_eq!(bullet_count(&mut app), 0);
}

#[test]
fn scan_with_zero_bullets_is_a_noop() {
    let mut app = build_app();
    spawn_player_at(&mut app, Vec2::new(10.0, 10.0));
    let meteor = spawn_meteor(
        &mut app,
        MeteorSize::Big,
        Vec2::new(760.0, 400.0),
        Vec2::new(1.0, 0.0),
    );

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert!(app.world().get_entity(meteor).is_ok(), "nothing to hit it with");
    assert_eq!(score(&app), 0);
}

#[test]
fn missed_bullet_survives_the_scan() {
    let mut app = build_app();
    spawn_player_at(&mut app, Vec2::new(10.0, 10.0));
    spawn_meteor(
        &mut app,
        MeteorSize::Small,
        Vec2::new(760.0, 400.0),
        Vec2::ZERO,
    );
    let stray = spawn_bullet(&mut app, Vec2::new(100.0, 700.0));

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert!(app.world().get_entity(stray).is_ok());
    assert_eq!(score(&app), 0);
}

// ── Player vs meteor ──────────────────────────────────────────────────────────

#[test]
fn player_collision_costs_a_life_and_wipes_the_field() {
    let mut app = build_app();
    app.insert_resource(Score(70));
    let player = spawn_player_at(&mut app, Vec2::new(700.0, 300.0));
    // One meteor on the ship, one drifting far away, plus a stray bullet:
    // the wipe takes all of them.
    spawn_meteor(&mut app, MeteorSize::Big, Vec2::new(700.0, 300.0), Vec2::ZERO);
    spawn_meteor(&mut app, MeteorSize::Small, Vec2::new(100.0, 100.0), Vec2::ZERO);
    spawn_bullet(&mut app, Vec2::new(400.0, 400.0));

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert_eq!(lives(&app), PLAYER_LIVES - 1);
    assert!(meteors(&mut app).is_empty(), "field wiped on ship contact");
    assert_eq!(bullet_count(&mut app), 0);
    assert_eq!(score(&app), 70, "partial reset keeps the score");

    let position = app.world().get::<Position>(player).unwrap().0;
    assert_eq!(position, Vec2::new(800.0, 450.0), "ship recentered");
    assert_eq!(app.world().get::<Velocity>(player).unwrap().0, Vec2::ZERO);
    assert_eq!(app.world().get::<RotationDegrees>(player).unwrap().0, 0.0);
}

#[test]
fn last_life_collision_then_full_reset_next_tick() {
    let mut app = build_app();
    app.insert_resource(PlayerLives(1));
    app.insert_resource(Score(150));
    let player = spawn_player_at(&mut app, Vec2::new(700.0, 300.0));
    spawn_meteor(&mut app, MeteorSize::Big, Vec2::new(700.0, 300.0), Vec2::ZERO);

    // Production order: the zero-lives check runs before resolution, so the
    // partial reset lands this tick and the full reset the next.
    app.add_systems(
        Update,
        (zero_lives_reset_system, collision_resolution_system).chain(),
    );
    app.update();

    assert_eq!(lives(&app), 0, "partial reset spent the last life");
    assert_eq!(score(&app), 150, "score survives until the full reset");
    assert!(meteors(&mut app).is_empty());

    app.update();

    assert_eq!(lives(&app), PLAYER_LIVES, "full reset restores lives");
    assert_eq!(score(&app), 0, "full reset zeroes the score");
    let position = app.world().get::<Position>(player).unwrap().0;
    assert_eq!(position, centered_spawn_position());
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[test]
fn ready_spawn_timer_emits_one_big_meteor_on_the_ring() {
    let mut app = build_app();
    // Zero-length gate: ready on the first tick.
    app.insert_resource(MeteorSpawnTimer(Cooldown::new(Duration::ZERO)));

    app.add_systems(Update, meteor_storm::meteor::meteor_spawn_system);
    app.update();

    let spawned = meteors(&mut app);
    assert_eq!(spawned.len(), 1);
    let (meteor, position, velocity) = &spawned[0];
    assert!(meteor.is_big());

    let config = GameConfig::default();
    let speed = velocity.length();
    assert!(speed > config.meteor_speed_min - 1e-3 && speed < config.meteor_speed_max + 1e-3);

    let center = Vec2::new(800.0, 450.0);
    assert!(((*position - center).length() - 800.0).abs() < 1e-2, "spawn point on the ring");
    // Velocity aimed inward.
    assert!(velocity.dot(center - *position) > 0.0);
}

#[test]
fn ring_spawn_survives_its_first_full_tick() {
    let mut app = build_app();
    spawn_player_at(&mut app, Vec2::new(10.0, 10.0));
    // Bottom of the ring: the spawn point deepest past a screen edge.
    let (spawn_point, velocity) = big_meteor_trajectory(FRAC_PI_2, 1.0);
    let meteor = app
        .world_mut()
        .spawn((
            Meteor {
                size: MeteorSize::Big,
                spawn_angle: FRAC_PI_2,
            },
            Position(spawn_point),
            Velocity(velocity),
        ))
        .id();

    app.add_systems(Update, gameplay_systems());
    app.update();

    assert!(
        app.world().get_entity(meteor).is_ok(),
        "fresh ring spawn must outlive the cull step of its own tick"
    );
    // One tick of inward drift has been applied.
    let position = app.world().get::<Position>(meteor).unwrap().0;
    assert!((position - spawn_point).length() > 0.0);
}

#[test]
fn bullet_kill_and_ship_contact_in_one_tick_resolve_cleanly() {
    let mut app = build_app();
    let player = spawn_player_at(&mut app, Vec2::new(700.0, 300.0));
    // One meteor under bullet fire, another ramming the ship in the same tick.
    let shot = spawn_meteor(
        &mut app,
        MeteorSize::Small,
        Vec2::new(1200.0, 700.0),
        Vec2::ZERO,
    );
    spawn_bullet(&mut app, Vec2::new(1210.0, 710.0));
    let rammer = spawn_meteor(&mut app, MeteorSize::Big, Vec2::new(700.0, 300.0), Vec2::ZERO);

    app.add_systems(Update, collision_resolution_system);
    app.update();

    assert!(app.world().get_entity(shot).is_err());
    assert!(app.world().get_entity(rammer).is_err());
    assert!(meteors(&mut app).is_empty());
    assert_eq!(bullet_count(&mut app), 0);
    assert_eq!(lives(&app), PLAYER_LIVES - 1);
    let position = app.world().get::<Position>(player).unwrap().0;
    assert_eq!(position, Vec2::new(800.0, 450.0));
}

// ── Full tick body ────────────────────────────────────────────────────────────

#[test]
fn full_tick_advances_world_without_side_effects() {
    let mut app = build_app();
    spawn_player_at(&mut app, Vec2::new(400.0, 200.0));
    let meteor = spawn_meteor(
        &mut app,
        MeteorSize::Big,
        Vec2::new(100.0, 100.0),
        Vec2::new(2.0, 3.0),
    );
    let bullet = spawn_bullet(&mut app, Vec2::new(1200.0, 600.0));
    app.world_mut().get_mut::<Velocity>(bullet).unwrap().0 = Vec2::new(-5.0, 0.0);

    app.add_systems(Update, gameplay_systems());
    app.update();

    assert_eq!(
        app.world().get::<Position>(meteor).unwrap().0,
        Vec2::new(102.0, 103.0)
    );
    assert_eq!(
        app.world().get::<Position>(bullet).unwrap().0,
        Vec2::new(1195.0, 600.0)
    );
    assert_eq!(score(&app), 0);
    assert_eq!(lives(&app), PLAYER_LIVES);
    // Spawn gate is cold: no extra meteors appeared.
    assert_eq!(meteors(&mut app).len(), 1);
}
