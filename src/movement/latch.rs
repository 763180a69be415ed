//! Movement domain: input latch bridging frame-rate input and fixed-rate ticks.
//!
//! Input notifications arrive once per rendered frame while the resolver runs
//! zero or more times per frame. Edges are latched until the next tick consumes
//! them; levels (`jump_held`, `move_axis`) simply hold their latest value.

use bevy::prelude::*;

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct InputLatch {
    jump_pressed_edge: bool,
    jump_released_edge: bool,
    jump_held: bool,
    move_axis: f32,
    facing_direction: f32,
}

impl InputLatch {
    /// Record a new horizontal input value. Out-of-range values are clamped to [-1, 1]
    /// and non-finite values are treated as no input.
    pub fn on_move_performed(&mut self, axis: f32) {
        let axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        self.move_axis = axis;
        if axis != 0.0 {
            self.facing_direction = axis.signum();
        }
    }

    /// Horizontal input released. Facing is kept.
    pub fn on_move_canceled(&mut self) {
        self.move_axis = 0.0;
    }

    pub fn on_jump_performed(&mut self) {
        self.jump_pressed_edge = true;
        self.jump_held = true;
    }

    pub fn on_jump_canceled(&mut self) {
        self.jump_released_edge = true;
        self.jump_held = false;
    }

    /// Returns whether a press happened since the last call, clearing the edge.
    pub fn consume_jump_pressed(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed_edge)
    }

    /// Returns whether a release happened since the last call, clearing the edge.
    pub fn consume_jump_released(&mut self) -> bool {
        std::mem::take(&mut self.jump_released_edge)
    }

    pub fn jump_held(&self) -> bool {
        self.jump_held
    }

    pub fn move_axis(&self) -> f32 {
        self.move_axis
    }

    /// Sign of the last nonzero horizontal input, or 0 before any input.
    pub fn facing_direction(&self) -> f32 {
        self.facing_direction
    }
}
