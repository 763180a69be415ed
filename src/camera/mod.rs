//! Camera domain: smoothed follow with look-ahead in the facing direction.
//!
//! The camera reads the target's facing from its input latch and never writes back
//! into gameplay state.

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::content::CameraDef;
use crate::movement::InputLatch;

/// Marker for the entity the camera follows.
#[derive(Component, Debug)]
pub struct CameraTarget;

/// Camera follow state. `velocity` is carried between frames by the damping.
#[derive(Component, Debug, Default)]
pub struct FollowCamera {
    pub velocity: Vec2,
}

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub offset: Vec2,
    pub smooth_time: f32,
    pub look_ahead: f32,
    pub bounds: Option<Rect>,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_def(&CameraDef::default())
    }
}

impl CameraTuning {
    pub fn from_def(def: &CameraDef) -> Self {
        Self {
            offset: Vec2::new(def.offset.0, def.offset.1),
            smooth_time: def.smooth_time,
            look_ahead: def.look_ahead,
            bounds: def.bounds.map(|b| Rect {
                min: Vec2::new(b.min_x, b.min_y),
                max: Vec2::new(b.max_x, b.max_y),
            }),
        }
    }

    /// Where the camera wants to be for a target at `target` facing `facing`.
    pub fn desired_position(&self, target: Vec2, facing: f32) -> Vec2 {
        target + self.offset + Vec2::new(self.look_ahead * facing, 0.0)
    }

    pub fn clamp_to_bounds(&self, position: Vec2) -> Vec2 {
        match self.bounds {
            Some(rect) => position.clamp(rect.min, rect.max),
            None => position,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                PostUpdate,
                follow_target.before(TransformSystems::Propagate),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, FollowCamera::default()));
}

fn follow_target(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    target_query: Query<(&Transform, Option<&InputLatch>), With<CameraTarget>>,
    mut camera_query: Query<(&mut Transform, &mut FollowCamera), Without<CameraTarget>>,
) {
    let Ok((target_transform, latch)) = target_query.single() else {
        return;
    };
    let Ok((mut camera_transform, mut follow)) = camera_query.single_mut() else {
        return;
    };

    let facing = latch.map_or(0.0, InputLatch::facing_direction);
    let desired = tuning.desired_position(target_transform.translation.truncate(), facing);

    let current = camera_transform.translation.truncate();
    let smoothed = smooth_damp(
        current,
        desired,
        &mut follow.velocity,
        tuning.smooth_time,
        time.delta_secs(),
    );
    let clamped = tuning.clamp_to_bounds(smoothed);

    camera_transform.translation.x = clamped.x;
    camera_transform.translation.y = clamped.y;
}

/// Critically damped spring toward `target`, reaching it in roughly `smooth_time` seconds.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    Vec2::new(
        smooth_damp_axis(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp_axis(current.y, target.y, &mut velocity.y, smooth_time, dt),
    )
}

fn smooth_damp_axis(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    // Never overshoot
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}
