//! Checkpoints domain: checkpoint recording, hazard contact and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::checkpoints::components::{Checkpoint, Hazard, LastCheckpoint};
use crate::checkpoints::events::{KillCause, KillPlayerEvent};
use crate::movement::{MotionState, Player};

pub(crate) fn record_checkpoints(
    mut collision_events: MessageReader<CollisionStart>,
    checkpoint_query: Query<&Transform, With<Checkpoint>>,
    mut player_query: Query<&mut LastCheckpoint, With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, checkpoint_entity) in pairs {
            let Ok(mut last_checkpoint) = player_query.get_mut(player_entity) else {
                continue;
            };
            let Ok(checkpoint_transform) = checkpoint_query.get(checkpoint_entity) else {
                continue;
            };

            let position = checkpoint_transform.translation.truncate();
            if last_checkpoint.record(position) {
                info!("Checkpoint reached: player={}, at={}", player_entity, position);
            }
        }
    }
}

pub(crate) fn kill_on_hazard_contact(
    mut collision_events: MessageReader<CollisionStart>,
    hazard_query: Query<(), With<Hazard>>,
    player_query: Query<(), With<Player>>,
    mut kill_events: MessageWriter<KillPlayerEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, hazard_entity) in pairs {
            if player_query.contains(player_entity) && hazard_query.contains(hazard_entity) {
                kill_events.write(KillPlayerEvent {
                    entity: player_entity,
                    cause: KillCause::Hazard,
                });
            }
        }
    }
}

/// Teleport killed characters to their last checkpoint and clear their motion.
/// A character with no checkpoint is left where it is.
pub(crate) fn respawn_killed_players(
    mut kill_events: MessageReader<KillPlayerEvent>,
    mut query: Query<(
        &LastCheckpoint,
        &mut Transform,
        &mut Position,
        &mut LinearVelocity,
        &mut MotionState,
    )>,
) {
    for event in kill_events.read() {
        let Ok((checkpoint, mut transform, mut position, mut velocity, mut state)) =
            query.get_mut(event.entity)
        else {
            continue;
        };

        let Some(target) = checkpoint.position() else {
            warn!(
                "Kill ignored: {} has no checkpoint ({:?})",
                event.entity, event.cause
            );
            continue;
        };

        position.0 = target;
        transform.translation.x = target.x;
        transform.translation.y = target.y;
        velocity.0 = Vec2::ZERO;
        state.reset();

        info!(
            "Respawned {} at {} after {:?}",
            event.entity, target, event.cause
        );
    }
}
