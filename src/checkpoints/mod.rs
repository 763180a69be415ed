//! Checkpoints domain: respawn points, hazards and kill handling.

mod components;
mod events;
mod systems;


pub use components::{Checkpoint, Hazard, LastCheckpoint};
pub use events::{KillCause, KillPlayerEvent};

use bevy::prelude::*;

use crate::checkpoints::systems::{
    kill_on_hazard_contact, record_checkpoints, respawn_killed_players,
};
use crate::core::GameState;
use crate::movement::MovementSet;

pub struct CheckpointsPlugin;

impl Plugin for CheckpointsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<KillPlayerEvent>().add_systems(
            FixedUpdate,
            (
                record_checkpoints,
                kill_on_hazard_contact,
                respawn_killed_players,
            )
                .chain()
                .after(MovementSet::Bounds)
                .run_if(in_state(GameState::Run)),
        );
    }
}
