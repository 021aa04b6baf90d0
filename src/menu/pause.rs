use super::*;

/// ESC while in `Playing` → transition to `Paused`.
///
/// Gameplay systems are gated on `in_state(Playing)`, so freezing the world
/// needs no further bookkeeping.
pub(super) fn toggle_pause_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Paused);
    }
}

/// ESC while in `Paused` → transition back to `Playing`.
pub(super) fn pause_resume_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Playing);
    }
}

/// Spawn the semi-transparent pause overlay over the frozen world.
pub(super) fn setup_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
            PauseOverlayRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("— PAUSED —"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 1.0)),
            ));
            overlay.spawn((
                Text::new("esc to resume"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}

/// Despawn the pause overlay on resume.
pub(super) fn cleanup_pause_overlay(
    mut commands: Commands,
    roots: Query<Entity, With<PauseOverlayRoot>>,
) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}
