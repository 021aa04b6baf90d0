use bevy::prelude::*;
use bevy::window::WindowResolution;

use meteor_storm::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use meteor_storm::GamePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Meteor Storm".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(GamePlugin)
        .run();
}
