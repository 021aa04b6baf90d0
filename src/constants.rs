//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors the runtime-tunable subset and can
//! overlay any of them from `assets/game.toml` without a recompile.
//!
//! Gameplay runs on a 60 Hz fixed timestep, so "per tick" below means 1/60 s.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Logical playfield width in units (one unit = one pixel at native zoom).
pub const SCREEN_WIDTH: f32 = 1600.0;

/// Logical playfield height in units.
pub const SCREEN_HEIGHT: f32 = 900.0;

// ── Fixed timestep ────────────────────────────────────────────────────────────

/// Gameplay tick rate.  Every per-tick constant below assumes this rate.
pub const TICK_HZ: f64 = 60.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Lives granted on a fresh session.
pub const PLAYER_LIVES: u32 = 3;

/// Ship turn rate in degrees per tick while a rotate input is held.
pub const ROTATION_SPEED: f32 = 2.0;

/// Thrust acceleration in units per tick² along the ship heading.
///
/// There is no drag, so velocity is unbounded — holding thrust forever keeps
/// accelerating.  This matches the reference handling model.
pub const THRUST_ACCELERATION: f32 = 0.03;

/// Player sprite extent (width = height) in units.
pub const PLAYER_EXTENT: f32 = 48.0;

/// Inset subtracted from the player sprite extent on each side to produce the
/// hit box.  Deliberately larger than [`METEOR_MARGIN`] / [`BULLET_MARGIN`];
/// the mismatch is part of the tuned feel, not an oversight.
pub const PLAYER_MARGIN: f32 = 15.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Muzzle speed in units per tick, applied along the ship heading.  The
/// player's own velocity is added on top, so bullets inherit momentum.
pub const BULLET_SPEED: f32 = 5.0;

/// Minimum interval between consecutive shots.
pub const FIRE_COOLDOWN_MS: u64 = 200;

/// Bullet sprite extent in units.  Must exceed twice [`BULLET_MARGIN`] so the
/// derived hit box keeps a non-negative size.
pub const BULLET_EXTENT: f32 = 24.0;

/// Hit-box inset for bullets.
pub const BULLET_MARGIN: f32 = 10.0;

// ── Meteors ───────────────────────────────────────────────────────────────────

/// Interval between big-meteor spawns.
pub const METEOR_SPAWN_INTERVAL_MS: u64 = 5000;

/// Lower bound (inclusive) of the random meteor speed in units per tick.
pub const METEOR_SPEED_MIN: f32 = 0.9;

/// Upper bound (exclusive) of the random meteor speed in units per tick.
pub const METEOR_SPEED_MAX: f32 = 1.9;

/// Lower bound (inclusive) of the random big→small split angle in degrees.
pub const SPLIT_ANGLE_MIN: f32 = 10.0;

/// Upper bound (exclusive) of the random big→small split angle in degrees.
pub const SPLIT_ANGLE_MAX: f32 = 45.0;

/// Big meteor sprite extent in units.
pub const METEOR_BIG_EXTENT: f32 = 96.0;

/// Small meteor sprite extent in units.
pub const METEOR_SMALL_EXTENT: f32 = 44.0;

/// Hit-box inset for meteors of both sizes.
pub const METEOR_MARGIN: f32 = 10.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Points awarded for shooting down a big meteor.
pub const BIG_METEOR_SCORE: u32 = 100;

/// Points awarded for shooting down a small meteor.
pub const SMALL_METEOR_SCORE: u32 = 50;

// ── Culling ───────────────────────────────────────────────────────────────────

/// Distance outside the screen bounds beyond which bullets are despawned.
/// Meteors use the larger of this and [`METEOR_OFFSCREEN_MARGIN`].
pub const OFFSCREEN_MARGIN: f32 = 200.0;

/// Floor for the meteor cull margin.  The spawn ring (radius
/// [`SCREEN_WIDTH`]/2 around the screen center) reaches
/// `SCREEN_WIDTH/2 − SCREEN_HEIGHT/2` = 350 units past the top and bottom
/// edges, so any smaller cull band would delete a fresh spawn on the tick it
/// appears.  The big-meteor extent is added as clearance.
pub const METEOR_OFFSCREEN_MARGIN: f32 =
    SCREEN_WIDTH / 2.0 - SCREEN_HEIGHT / 2.0 + METEOR_BIG_EXTENT;
