//! Core domain: core run flow systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::state::GameState;

/// Leave boot once content resources are in place.
pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

/// Toggle pause with Escape. Pausing also stops the physics clock so bodies freeze in place.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Run => {
            physics_time.pause();
            next_state.set(GameState::Paused);
            info!("Paused");
        }
        GameState::Paused => {
            physics_time.unpause();
            next_state.set(GameState::Run);
            info!("Resumed");
        }
        GameState::Boot => {}
    }
}
