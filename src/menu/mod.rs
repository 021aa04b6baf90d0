//! Title screen, pause overlay, and the [`GameState`] machine that gates the
//! gameplay tick body.
//!
//! ## Transitions
//!
//! | From | Input | To |
//! |------|-------|----|
//! | `MainMenu` | Enter | `Playing` |
//! | `Playing` | Escape | `Paused` |
//! | `Paused` | Escape | `Playing` |
//!
//! ## Systems (registered by [`MenuPlugin`])
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `setup_main_menu` | `OnEnter(MainMenu)` | Spawn title screen |
//! | `cleanup_main_menu` | `OnExit(MainMenu)` | Despawn title screen |
//! | `main_menu_advance_system` | `Update / in MainMenu` | Enter → Playing |
//! | `toggle_pause_system` | `Update / in Playing` | Escape → Paused |
//! | `pause_resume_input_system` | `Update / in Paused` | Escape → Playing |
//! | `setup_pause_overlay` | `OnEnter(Paused)` | Spawn pause overlay |
//! | `cleanup_pause_overlay` | `OnExit(Paused)` | Despawn pause overlay |

mod main_menu;
mod pause;
mod types;

use bevy::prelude::*;

pub use types::{GameState, MainMenuRoot, PauseOverlayRoot};

/// Registers `GameState` and all menu UI and transition systems.
///
/// Must be added **before** any plugin that calls
/// `.run_if(in_state(GameState::…))`, so the state is always registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), main_menu::setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), main_menu::cleanup_main_menu)
            .add_systems(
                Update,
                main_menu::main_menu_advance_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                Update,
                pause::toggle_pause_system.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                pause::pause_resume_input_system.run_if(in_state(GameState::Paused)),
            )
            .add_systems(OnEnter(GameState::Paused), pause::setup_pause_overlay)
            .add_systems(OnExit(GameState::Paused), pause::cleanup_pause_overlay);
    }
}
