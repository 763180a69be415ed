//! Movement domain: fixed-tick motion resolution and bounds check.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::checkpoints::{KillCause, KillPlayerEvent};
use crate::movement::{GroundSensor, InputLatch, MotionState, MovementTuning, Player, TickContext};

pub(crate) fn resolve_motion(
    time: Res<Time>,
    gravity: Res<Gravity>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            Entity,
            &GroundSensor,
            &mut InputLatch,
            &mut MotionState,
            &mut LinearVelocity,
            Option<&GravityScale>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, sensor, mut latch, mut state, mut velocity, gravity_scale) in &mut query {
        let ctx = TickContext {
            dt,
            gravity_y: gravity.0.y * gravity_scale.map_or(1.0, |s| s.0),
        };

        let outcome = state.step(&mut latch, &tuning, sensor.grounded, velocity.0, ctx);

        if outcome.launched {
            debug!(
                "Jump: entity={}, grounded={}, vy={}",
                entity, sensor.grounded, outcome.velocity.y
            );
        }
        if outcome.jump_cut {
            debug!("Jump cut: entity={}, vy={}", entity, outcome.velocity.y);
        }

        velocity.0 = outcome.velocity;
    }
}

/// Kill characters below the kill plane. Uses the position from before this tick's integration.
pub(crate) fn check_kill_plane(
    tuning: Res<MovementTuning>,
    query: Query<(Entity, &Position), With<Player>>,
    mut kill_events: MessageWriter<KillPlayerEvent>,
) {
    for (entity, position) in &query {
        if position.0.y < tuning.kill_plane_y {
            kill_events.write(KillPlayerEvent {
                entity,
                cause: KillCause::OutOfBounds,
            });
        }
    }
}
