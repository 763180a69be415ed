//! Level domain: course entity spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::checkpoints::{Checkpoint, Hazard};
use crate::level::CourseLayout;
use crate::movement::{GameLayer, Ground};

/// Marker for every entity belonging to the course.
#[derive(Component, Debug)]
pub struct CoursePiece;

pub(crate) fn spawn_course(
    mut commands: Commands,
    course: Res<CourseLayout>,
    existing: Query<(), With<CoursePiece>>,
) {
    if !existing.is_empty() {
        return;
    }

    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let checkpoint_color = Color::srgba(0.3, 0.6, 0.95, 0.35);
    let hazard_color = Color::srgb(0.85, 0.25, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    for rect in &course.blocks {
        let size = rect.size();
        commands.spawn((
            CoursePiece,
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(rect.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for rect in &course.checkpoints {
        let size = rect.size();
        commands.spawn((
            CoursePiece,
            Checkpoint,
            Sprite {
                color: checkpoint_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(rect.center().extend(-0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            sensor_layers,
        ));
    }

    for rect in &course.hazards {
        let size = rect.size();
        commands.spawn((
            CoursePiece,
            Hazard,
            Sprite {
                color: hazard_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(rect.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            hazard_layers,
        ));
    }

    info!(
        "Course spawned: blocks={}, checkpoints={}, hazards={}",
        course.blocks.len(),
        course.checkpoints.len(),
        course.hazards.len()
    );
}
