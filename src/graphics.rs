use bevy::prelude::*;

/// Setup camera for 2D rendering.
///
/// The window resolution matches the logical playfield (1600×900), so one
/// world unit is one pixel at native zoom.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
