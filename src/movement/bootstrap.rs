//! Movement domain: player bootstrap from loaded tuning and course data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::CameraTarget;
use crate::checkpoints::LastCheckpoint;
use crate::level::CourseLayout;
use crate::movement::{GameLayer, GroundSensor, InputLatch, MotionState, MovementTuning, Player};

/// Spawn the player at the course spawn point.
/// Runs on entering GameState::Run, so it also fires when resuming from pause.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    course: Res<CourseLayout>,
    gravity: Res<Gravity>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        debug!("Player already exists, skipping spawn");
        return;
    }

    let spawn = course.spawn;
    let size = tuning.body_size;

    info!(
        "Spawning player: at={}, size={}, top_speed={}, jump_force={}, tap_apex={:.1}",
        spawn,
        size,
        tuning.top_speed,
        tuning.jump_force,
        tuning.tap_jump_height(gravity.0.y)
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            CameraTarget,
            InputLatch::default(),
            MotionState::default(),
            GroundSensor::new(tuning.sensor_offset, tuning.sensor_size),
            // The spawn point doubles as the first checkpoint so a kill always has a target
            LastCheckpoint::at(spawn),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(spawn.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Hazard, GameLayer::Sensor],
            ),
        ),
    ));
}
