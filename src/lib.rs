//! Meteor Storm — a small 2D arcade asteroids game.
//!
//! Rotate, thrust, and fire to break up the meteors drifting in from the
//! screen edges.  Big meteors split into two smalls when shot; contact with
//! the ship costs a life and wipes the field; running out of lives restarts
//! the session.
//!
//! The crate is split so the gameplay core never touches the renderer:
//! everything under [`session`], [`player`], [`bullet`], [`meteor`],
//! [`collision`], [`cooldown`], [`vector`], and [`motion`] runs headless (the
//! integration tests do exactly that), while [`rendering`] and [`graphics`]
//! are the opaque draw sink.

pub mod bullet;
pub mod collision;
pub mod config;
pub mod constants;
pub mod cooldown;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod meteor;
pub mod motion;
pub mod player;
pub mod rendering;
pub mod session;
pub mod vector;

use bevy::prelude::*;

/// Everything except the window: state machine, gameplay tick body, renderer
/// coupling, and the config overlay.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, config::load_game_config).add_plugins((
            menu::MenuPlugin,
            session::SessionPlugin,
            rendering::RenderingPlugin,
        ));
    }
}
