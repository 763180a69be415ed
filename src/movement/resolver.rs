//! Movement domain: per-tick motion resolution.
//!
//! Two countdown timers (coyote, jump buffer) plus the `is_jumping` latch decide
//! whether a jump launches. The rest of the tick shapes vertical velocity and ramps
//! horizontal velocity toward the input target. Everything here is pure so it can
//! be driven headlessly; the systems in `systems::movement` feed it engine state.

use bevy::prelude::*;

use crate::movement::{InputLatch, MovementTuning};

#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Seconds left in which a jump is allowed after leaving the ground.
    pub coyote_timer: f32,
    /// Seconds left in which a pending press is still honored. Negative means expired.
    pub jump_buffer_timer: f32,
    /// Set on launch, cleared on the next grounded tick.
    pub is_jumping: bool,
}

/// Engine-provided values for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub dt: f32,
    /// Signed baseline gravity along y (negative is down).
    pub gravity_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub velocity: Vec2,
    pub launched: bool,
    pub jump_cut: bool,
}

impl MotionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one fixed tick and return the velocity to commit to the body.
    ///
    /// `grounded` must come from a ground query made this tick, and `velocity` is the
    /// body's current velocity as read from the physics engine.
    pub fn step(
        &mut self,
        latch: &mut InputLatch,
        tuning: &MovementTuning,
        grounded: bool,
        velocity: Vec2,
        ctx: TickContext,
    ) -> TickOutcome {
        let dt = if ctx.dt.is_finite() { ctx.dt.max(0.0) } else { 0.0 };
        let velocity = Vec2::new(finite_or_zero(velocity.x), finite_or_zero(velocity.y));

        if latch.consume_jump_pressed() {
            self.jump_buffer_timer = tuning.jump_buffer_time;
        } else {
            self.jump_buffer_timer -= dt;
        }

        if grounded {
            self.coyote_timer = tuning.coyote_time;
            self.is_jumping = false;
        } else {
            self.coyote_timer -= dt;
        }

        let mut vy = velocity.y;
        let mut launched = false;
        if self.jump_buffer_timer > 0.0 && self.coyote_timer > 0.0 && !self.is_jumping {
            vy = tuning.jump_force;
            self.is_jumping = true;
            self.coyote_timer = 0.0;
            self.jump_buffer_timer = 0.0;
            launched = true;
        }

        // The release edge is drained every tick, even when there is nothing to cut.
        let released = latch.consume_jump_released();
        let jump_cut = released && vy > 0.0;
        if jump_cut {
            vy *= tuning.jump_cut_multiplier;
        }

        vy = shape_gravity(vy, latch.jump_held(), tuning, ctx.gravity_y, dt);
        vy = vy.max(tuning.max_fall_speed);

        let vx = move_toward(
            velocity.x,
            tuning.top_speed * latch.move_axis(),
            tuning.acceleration * dt,
        );

        TickOutcome {
            velocity: Vec2::new(vx, vy),
            launched,
            jump_cut,
        }
    }
}

/// Extra gravity on the way down, and while rising with the button held.
///
/// The held branch adds gravity rather than removing it, which shortens held jumps.
/// This mirrors the tuning the controller was authored against.
pub fn shape_gravity(
    vy: f32,
    jump_held: bool,
    tuning: &MovementTuning,
    gravity_y: f32,
    dt: f32,
) -> f32 {
    if vy < 0.0 {
        vy + gravity_y * (tuning.fall_multiplier - 1.0) * dt
    } else if vy > 0.0 && jump_held {
        vy + gravity_y * (tuning.low_jump_multiplier - 1.0) * dt
    } else {
        vy
    }
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
