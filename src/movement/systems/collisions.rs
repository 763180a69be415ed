//! Movement domain: ground detection and body validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor, MovementSetupError, Player};

/// Reject players spawned without a physics body. Runs once per newly added player.
pub(crate) fn validate_player_body(
    query: Query<(Entity, Has<RigidBody>, Has<LinearVelocity>), Added<Player>>,
) -> Result {
    for (entity, has_body, has_velocity) in &query {
        if !has_body {
            return Err(MovementSetupError::MissingRigidBody(entity).into());
        }
        if !has_velocity {
            return Err(MovementSetupError::MissingVelocity(entity).into());
        }
    }
    Ok(())
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Position, &mut GroundSensor), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not hazards, checkpoints, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, position, mut sensor) in &mut query {
        let was_grounded = sensor.grounded;
        let origin = position.0 + sensor.offset;
        let filter = ground_filter.clone().with_excluded_entities([entity]);

        let hits = spatial_query.shape_intersections(&sensor.shape, origin, 0.0, &filter);
        sensor.grounded = !hits.is_empty();

        if sensor.grounded && !was_grounded {
            debug!("Landed: entity={}, y={:.1}", entity, position.0.y);
        } else if !sensor.grounded && was_grounded {
            debug!("Left ground: entity={}, y={:.1}", entity, position.0.y);
        }
    }
}
