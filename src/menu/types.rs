use bevy::prelude::*;

/// Top-level application state machine.
///
/// Every gameplay system in [`crate::session::SessionPlugin`] runs under
/// `.run_if(in_state(GameState::Playing))`, so the whole tick body is inert
/// while a menu or the pause overlay is up.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    MainMenu,
    /// Active gameplay.
    Playing,
    /// World frozen; pause overlay visible.
    Paused,
}

/// Root node of the title screen UI; the tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Root node of the pause overlay; despawned on `OnExit(Paused)`.
#[derive(Component)]
pub struct PauseOverlayRoot;
