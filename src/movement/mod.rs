//! Movement domain: input latching, ground sensing and per-tick motion resolution.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod error;
mod latch;
mod resolver;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, GroundSensor, Player};
pub use error::MovementSetupError;
pub use latch::InputLatch;
pub use resolver::{MotionState, TickContext, TickOutcome, move_toward, shape_gravity};
pub use resources::{MovementSet, MovementTuning};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::core::GameState;
use crate::level::LevelSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    check_kill_plane, detect_ground, read_input, resolve_motion, validate_player_body,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .configure_sets(
                FixedUpdate,
                (
                    MovementSet::Sense,
                    MovementSet::Resolve,
                    MovementSet::Bounds,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(OnEnter(GameState::Run), spawn_player.after(LevelSet))
            .add_systems(
                PreUpdate,
                read_input
                    .after(InputSystems)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                (
                    (validate_player_body, detect_ground)
                        .chain()
                        .in_set(MovementSet::Sense),
                    resolve_motion.in_set(MovementSet::Resolve),
                    check_kill_plane.in_set(MovementSet::Bounds),
                ),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_sensors);
    }
}
