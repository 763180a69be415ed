//! Core domain: state machine and run flow wiring.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::content::ContentSet;
use crate::core::systems::{toggle_pause, transition_to_run};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, transition_to_run.after(ContentSet))
            .add_systems(Update, toggle_pause);
    }
}
