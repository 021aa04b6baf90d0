//! The render sink: colored sprite quads, logical→world transform sync, and
//! the score/lives HUD.
//!
//! Gameplay code never touches a [`Transform`] — it works in the y-down
//! logical space described in [`crate::motion`].  The systems here attach a
//! sprite to every newly spawned entity and mirror logical position/rotation
//! into render transforms once per frame, which is the entire coupling between
//! the game core and the renderer.
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `setup_hud` | `Startup` | Spawn score + lives text nodes |
//! | `attach_sprites_system` | `Update` | Give new entities a quad + transform |
//! | `sync_transforms` | `Update` | Logical space → render space |
//! | `hud_score_display_system` | `Update` | Refresh score text |
//! | `hud_lives_display_system` | `Update` | Refresh lives text |

use crate::bullet::Bullet;
use crate::constants::{BULLET_EXTENT, PLAYER_EXTENT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::meteor::{Meteor, MeteorSize};
use crate::motion::{Position, RotationDegrees};
use crate::player::{Player, PlayerLives};
use crate::session::Score;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Sprite extent (width = height) in logical units; also used to convert the
/// logical top-left position into the sprite's render-space center.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpriteExtent(pub f32);

/// Marker for the score text node.
#[derive(Component)]
pub struct ScoreDisplay;

/// Marker for the lives text node.
#[derive(Component)]
pub struct LivesDisplay;

// ── Sprite attachment ─────────────────────────────────────────────────────────

/// Give every freshly spawned gameplay entity a colored quad, its extent, and
/// an initial transform (z picks the draw layer: meteors under bullets under
/// the ship).
///
/// Runs in `Update` so entities spawned mid-tick get their visuals on the
/// next render frame; gameplay never waits on this.
pub fn attach_sprites_system(
    mut commands: Commands,
    new_players: Query<Entity, Added<Player>>,
    new_meteors: Query<(Entity, &Meteor), Added<Meteor>>,
    new_bullets: Query<Entity, Added<Bullet>>,
) {
    for entity in &new_players {
        commands.entity(entity).insert((
            Sprite::from_color(Color::srgb(0.85, 0.90, 1.0), Vec2::splat(PLAYER_EXTENT)),
            SpriteExtent(PLAYER_EXTENT),
            Transform::from_xyz(0.0, 0.0, 2.0),
        ));
    }
    for (entity, meteor) in &new_meteors {
        let tint = match meteor.size {
            MeteorSize::Big => Color::srgb(0.55, 0.48, 0.42),
            MeteorSize::Small => Color::srgb(0.65, 0.58, 0.52),
        };
        commands.entity(entity).insert((
            Sprite::from_color(tint, Vec2::splat(meteor.size.extent())),
            SpriteExtent(meteor.size.extent()),
            Transform::from_xyz(0.0, 0.0, 0.5),
        ));
    }
    for entity in &new_bullets {
        commands.entity(entity).insert((
            Sprite::from_color(Color::srgb(1.0, 0.9, 0.4), Vec2::splat(BULLET_EXTENT)),
            SpriteExtent(BULLET_EXTENT),
            Transform::from_xyz(0.0, 0.0, 1.0),
        ));
    }
}

// ── Transform sync ────────────────────────────────────────────────────────────

/// Mirror logical position/rotation into render transforms.
///
/// Logical space is y-down with the origin at the top-left and positions
/// naming sprite top-left corners; render space is Bevy's centered y-up world
/// with center-anchored sprites.  The y flip also negates rotation angles.
pub fn sync_transforms(
    mut query: Query<(
        &Position,
        &SpriteExtent,
        Option<&RotationDegrees>,
        &mut Transform,
    )>,
) {
    for (position, extent, rotation, mut transform) in &mut query {
        let center = position.0 + Vec2::splat(extent.0 / 2.0);
        transform.translation.x = center.x - SCREEN_WIDTH / 2.0;
        transform.translation.y = SCREEN_HEIGHT / 2.0 - center.y;
        if let Some(rotation) = rotation {
            transform.rotation = Quat::from_rotation_z(-rotation.0.to_radians());
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Spawn the permanent HUD: zero-padded score top-center, lives top-left.
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        children![(
            Text::new("000000"),
            TextFont {
                font_size: 48.0,
                ..default()
            },
            TextColor(Color::WHITE),
            ScoreDisplay,
        )],
    ));
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(14.0),
            ..default()
        },
        children![(
            Text::new("LIVES 3"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.5, 0.5)),
            LivesDisplay,
        )],
    ));
}

/// Refresh the score readout when the score changes.
pub fn hud_score_display_system(
    score: Res<Score>,
    mut query: Query<&mut Text, With<ScoreDisplay>>,
) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut query {
        *text = Text::new(format!("{:06}", score.0));
    }
}

/// Refresh the lives readout when the count changes.
pub fn hud_lives_display_system(
    lives: Res<PlayerLives>,
    mut query: Query<&mut Text, With<LivesDisplay>>,
) {
    if !lives.is_changed() {
        return;
    }
    for mut text in &mut query {
        *text = Text::new(format!("LIVES {}", lives.0));
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Camera, sprites, transform sync, and HUD.  Everything here is render-side;
/// none of it is required by the headless gameplay tests.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (crate::graphics::setup_camera, setup_hud))
            .add_systems(
                Update,
                (
                    attach_sprites_system,
                    sync_transforms,
                    hud_score_display_system,
                    hud_lives_display_system,
                ),
            );
    }
}
