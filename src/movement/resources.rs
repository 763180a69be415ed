//! Movement domain: tuning resource and schedule sets.

use bevy::prelude::*;

use crate::content::{BodyDef, MovementDef};

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub top_speed: f32,
    pub acceleration: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Applied to upward velocity when jump is released early.
    pub jump_cut_multiplier: f32,
    pub fall_multiplier: f32,
    /// Extra gravity factor while rising with jump held.
    pub low_jump_multiplier: f32,
    /// Floor on vertical velocity (negative).
    pub max_fall_speed: f32,
    pub kill_plane_y: f32,
    pub body_size: Vec2,
    pub sensor_offset: Vec2,
    /// Ground sensor box. Width follows the body so the overlap matches its footprint.
    pub sensor_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_defs(&MovementDef::default(), &BodyDef::default())
    }
}

impl MovementTuning {
    pub fn from_defs(movement: &MovementDef, body: &BodyDef) -> Self {
        Self {
            top_speed: movement.top_speed,
            acceleration: movement.acceleration,
            jump_force: movement.jump_force,
            coyote_time: movement.coyote_time,
            jump_buffer_time: movement.jump_buffer_time,
            jump_cut_multiplier: movement.jump_cut_multiplier,
            fall_multiplier: movement.fall_multiplier,
            low_jump_multiplier: movement.low_jump_multiplier,
            max_fall_speed: movement.max_fall_speed,
            kill_plane_y: movement.kill_plane_y,
            body_size: Vec2::new(body.size.0, body.size.1),
            sensor_offset: Vec2::new(body.sensor_offset.0, body.sensor_offset.1),
            sensor_size: Vec2::new(body.size.0, body.sensor_height),
        }
    }

    /// Apex height of a tap jump: pressed and released on the launch tick, so the launch
    /// velocity is cut once and only baseline gravity acts on the way up.
    pub fn tap_jump_height(&self, gravity: f32) -> f32 {
        if gravity == 0.0 {
            return f32::INFINITY;
        }
        let launch = self.jump_force * self.jump_cut_multiplier;
        launch * launch / (2.0 * gravity.abs())
    }
}

/// Per-tick movement stages, chained in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Ground contact and body validation.
    Sense,
    /// Timers, launch decision, gravity shaping and velocity commit.
    Resolve,
    /// Kill-plane check.
    Bounds,
}
