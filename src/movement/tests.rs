//! Movement domain: unit tests for the input latch and per-tick motion resolution.
//!
//! Durations are multiples of 1/16 s so timer arithmetic is exact in f32.

use bevy::prelude::*;

use super::systems::input::{dispatch_jump, dispatch_move};
use super::{InputLatch, MotionState, MovementTuning, TickContext, TickOutcome, move_toward};
use crate::content::{BodyDef, MovementDef};

const DT: f32 = 0.0625;
const GRAVITY: f32 = -10.0;

fn tuning() -> MovementTuning {
    MovementTuning {
        top_speed: 10.0,
        acceleration: 80.0,
        jump_force: 10.0,
        coyote_time: 0.25,
        jump_buffer_time: 0.25,
        jump_cut_multiplier: 0.5,
        fall_multiplier: 2.0,
        low_jump_multiplier: 1.5,
        max_fall_speed: -20.0,
        kill_plane_y: -100.0,
        ..MovementTuning::default()
    }
}

fn ctx() -> TickContext {
    TickContext {
        dt: DT,
        gravity_y: GRAVITY,
    }
}

struct Rig {
    state: MotionState,
    latch: InputLatch,
    tuning: MovementTuning,
}

impl Rig {
    fn new() -> Self {
        Self {
            state: MotionState::default(),
            latch: InputLatch::default(),
            tuning: tuning(),
        }
    }

    fn tick(&mut self, grounded: bool, velocity: Vec2) -> TickOutcome {
        self.state
            .step(&mut self.latch, &self.tuning, grounded, velocity, ctx())
    }
}

// -----------------------------------------------------------------------------
// Input latch
// -----------------------------------------------------------------------------

#[test]
fn test_jump_press_edge_consumed_once() {
    let mut latch = InputLatch::default();
    latch.on_jump_performed();

    assert!(latch.jump_held());
    assert!(latch.consume_jump_pressed());
    assert!(!latch.consume_jump_pressed());
    // Held is a level, not an edge
    assert!(latch.jump_held());
}

#[test]
fn test_jump_release_edge_consumed_once() {
    let mut latch = InputLatch::default();
    latch.on_jump_performed();
    latch.on_jump_canceled();

    assert!(!latch.jump_held());
    assert!(latch.consume_jump_released());
    assert!(!latch.consume_jump_released());
}

#[test]
fn test_edges_coalesce_between_ticks() {
    let mut latch = InputLatch::default();
    latch.on_jump_performed();
    latch.on_jump_canceled();
    latch.on_jump_performed();

    assert!(latch.jump_held());
    assert!(latch.consume_jump_pressed());
    assert!(latch.consume_jump_released());
}

#[test]
fn test_move_cancel_keeps_facing() {
    let mut latch = InputLatch::default();
    assert_eq!(latch.facing_direction(), 0.0);

    latch.on_move_performed(-0.4);
    assert_eq!(latch.move_axis(), -0.4);
    assert_eq!(latch.facing_direction(), -1.0);

    latch.on_move_canceled();
    assert_eq!(latch.move_axis(), 0.0);
    assert_eq!(latch.facing_direction(), -1.0);

    latch.on_move_performed(0.0);
    assert_eq!(latch.facing_direction(), -1.0);
}

#[test]
fn test_move_axis_is_clamped() {
    let mut latch = InputLatch::default();

    latch.on_move_performed(3.0);
    assert_eq!(latch.move_axis(), 1.0);

    latch.on_move_performed(f32::NAN);
    assert_eq!(latch.move_axis(), 0.0);
    assert_eq!(latch.facing_direction(), 1.0);
}

#[test]
fn test_dispatch_move_only_on_change() {
    let mut latch = InputLatch::default();

    dispatch_move(&mut latch, 1.0);
    assert_eq!(latch.move_axis(), 1.0);

    dispatch_move(&mut latch, 0.0);
    assert_eq!(latch.move_axis(), 0.0);
    assert_eq!(latch.facing_direction(), 1.0);
}

#[test]
fn test_dispatch_jump_tap_within_one_frame() {
    let mut latch = InputLatch::default();
    dispatch_jump(&mut latch, true, true, false);

    assert!(!latch.jump_held());
    assert!(latch.consume_jump_pressed());
    assert!(latch.consume_jump_released());
}

#[test]
fn test_dispatch_jump_repress_within_one_frame() {
    let mut latch = InputLatch::default();
    latch.on_jump_performed();
    latch.consume_jump_pressed();

    dispatch_jump(&mut latch, true, true, true);

    assert!(latch.jump_held());
    assert!(latch.consume_jump_pressed());
    assert!(latch.consume_jump_released());
}

#[test]
fn test_dispatch_jump_recovers_release_missed_while_paused() {
    let mut latch = InputLatch::default();
    dispatch_jump(&mut latch, true, false, true);
    assert!(latch.consume_jump_pressed());

    // Key released while input sampling was suspended: no edge arrives on resume
    dispatch_jump(&mut latch, false, false, false);

    assert!(!latch.jump_held());
    assert!(latch.consume_jump_released());
    assert!(!latch.consume_jump_pressed());

    // Later idle frames raise nothing further
    dispatch_jump(&mut latch, false, false, false);
    assert!(!latch.consume_jump_released());
}

#[test]
fn test_dispatch_jump_idle_held_key_stays_held() {
    let mut latch = InputLatch::default();
    dispatch_jump(&mut latch, true, false, true);
    latch.consume_jump_pressed();

    dispatch_jump(&mut latch, false, false, true);

    assert!(latch.jump_held());
    assert!(!latch.consume_jump_released());
}

#[test]
fn test_release_recovered_after_pause_cuts_ascent() {
    let mut rig = Rig::new();
    dispatch_jump(&mut rig.latch, true, false, true);
    let launch = rig.tick(true, Vec2::ZERO);
    assert!(launch.launched);

    dispatch_jump(&mut rig.latch, false, false, false);
    let out = rig.tick(false, Vec2::new(0.0, 8.0));

    assert!(out.jump_cut);
    // 8 * 0.5, no held-jump gravity once the release is seen
    assert_eq!(out.velocity.y, 4.0);
}

// -----------------------------------------------------------------------------
// Launch decision
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_press_launches() {
    let mut rig = Rig::new();
    rig.tuning.low_jump_multiplier = 1.0;

    rig.latch.on_jump_performed();
    let out = rig.tick(true, Vec2::ZERO);

    assert!(out.launched);
    assert_eq!(out.velocity.y, 10.0);
    assert!(rig.state.is_jumping);
    assert_eq!(rig.state.coyote_timer, 0.0);
    assert_eq!(rig.state.jump_buffer_timer, 0.0);
}

#[test]
fn test_press_inside_coyote_window_launches() {
    let mut rig = Rig::new();
    rig.tick(true, Vec2::ZERO);
    rig.tick(false, Vec2::ZERO);
    rig.tick(false, Vec2::ZERO);

    rig.latch.on_jump_performed();
    let out = rig.tick(false, Vec2::new(0.0, -1.0));

    assert!(out.launched);
    assert!(rig.state.is_jumping);
}

#[test]
fn test_press_after_coyote_expired_does_not_launch() {
    let mut rig = Rig::new();
    rig.tick(true, Vec2::ZERO);
    for _ in 0..4 {
        rig.tick(false, Vec2::new(0.0, -1.0));
    }
    assert_eq!(rig.state.coyote_timer, 0.0);

    rig.latch.on_jump_performed();
    let out = rig.tick(false, Vec2::new(0.0, -1.0));

    assert!(!out.launched);
    assert!(!rig.state.is_jumping);
    assert!(out.velocity.y < 0.0);
}

#[test]
fn test_buffered_press_launches_on_landing() {
    let mut rig = Rig::new();

    rig.latch.on_jump_performed();
    assert!(!rig.tick(false, Vec2::new(0.0, -5.0)).launched);
    assert!(!rig.tick(false, Vec2::new(0.0, -5.0)).launched);
    assert!(!rig.tick(false, Vec2::new(0.0, -5.0)).launched);

    let out = rig.tick(true, Vec2::ZERO);
    assert!(out.launched);
    assert_eq!(rig.state.jump_buffer_timer, 0.0);
}

#[test]
fn test_buffered_press_expires_before_late_landing() {
    let mut rig = Rig::new();

    rig.latch.on_jump_performed();
    for _ in 0..4 {
        rig.tick(false, Vec2::new(0.0, -5.0));
    }

    let out = rig.tick(true, Vec2::ZERO);
    assert!(!out.launched);
    assert!(!rig.state.is_jumping);
}

#[test]
fn test_single_launch_per_airborne_period() {
    let mut rig = Rig::new();
    rig.latch.on_jump_performed();
    assert!(rig.tick(true, Vec2::ZERO).launched);

    let mut launches = 0;
    let mut velocity = Vec2::new(0.0, 10.0);
    for i in 0..12 {
        if i % 3 == 0 {
            rig.latch.on_jump_performed();
        }
        let out = rig.tick(false, velocity);
        if out.launched {
            launches += 1;
        }
        velocity = out.velocity;
    }

    assert_eq!(launches, 0);
}

#[test]
fn test_landing_clears_is_jumping() {
    let mut rig = Rig::new();
    rig.latch.on_jump_performed();
    rig.tick(true, Vec2::ZERO);
    rig.tick(false, Vec2::new(0.0, 5.0));
    assert!(rig.state.is_jumping);

    rig.tick(true, Vec2::ZERO);
    assert!(!rig.state.is_jumping);
    assert_eq!(rig.state.coyote_timer, 0.25);
}

// -----------------------------------------------------------------------------
// Jump cut and gravity shaping
// -----------------------------------------------------------------------------

#[test]
fn test_release_while_rising_cuts_velocity() {
    let mut rig = Rig::new();
    rig.latch.on_jump_performed();
    rig.tick(true, Vec2::ZERO);

    rig.latch.on_jump_canceled();
    let out = rig.tick(false, Vec2::new(0.0, 8.0));

    assert!(out.jump_cut);
    assert_eq!(out.velocity.y, 4.0);
}

#[test]
fn test_release_while_falling_is_noop() {
    let mut rig = Rig::new();
    rig.latch.on_jump_canceled();

    let out = rig.tick(false, Vec2::ZERO);
    assert!(!out.jump_cut);
    assert_eq!(out.velocity.y, 0.0);
}

#[test]
fn test_release_edge_does_not_carry_to_next_tick() {
    let mut rig = Rig::new();
    rig.latch.on_jump_canceled();
    rig.tick(false, Vec2::new(0.0, -2.0));

    let out = rig.tick(false, Vec2::new(0.0, 6.0));
    assert!(!out.jump_cut);
    assert_eq!(out.velocity.y, 6.0);
}

#[test]
fn test_press_and_release_same_tick_cuts_fresh_jump() {
    let mut rig = Rig::new();
    rig.latch.on_jump_performed();
    rig.latch.on_jump_canceled();

    let out = rig.tick(true, Vec2::ZERO);
    assert!(out.launched);
    assert!(out.jump_cut);
    assert_eq!(out.velocity.y, 5.0);
}

#[test]
fn test_fall_gravity_multiplier() {
    let mut rig = Rig::new();
    let out = rig.tick(false, Vec2::new(0.0, -4.0));

    // -4 + (-10) * (2 - 1) * 0.0625
    assert_eq!(out.velocity.y, -4.625);
}

#[test]
fn test_held_jump_gets_extra_gravity_while_rising() {
    // Holding adds gravity on the way up; releasing leaves ascent to the baseline.
    let mut held = Rig::new();
    held.latch.on_jump_performed();
    held.latch.consume_jump_pressed();
    let held_out = held.tick(false, Vec2::new(0.0, 8.0));

    let mut released = Rig::new();
    let released_out = released.tick(false, Vec2::new(0.0, 8.0));

    // 8 + (-10) * (1.5 - 1) * 0.0625
    assert_eq!(held_out.velocity.y, 7.6875);
    assert_eq!(released_out.velocity.y, 8.0);
}

#[test]
fn test_fall_speed_never_below_terminal() {
    let mut rig = Rig::new();
    rig.tuning.fall_multiplier = 50.0;

    let mut velocity = Vec2::ZERO;
    for _ in 0..40 {
        let out = rig.tick(false, velocity);
        assert!(out.velocity.y >= rig.tuning.max_fall_speed);
        // Stand-in for engine integration
        velocity = out.velocity + Vec2::new(0.0, GRAVITY * DT);
    }

    assert_eq!(rig.tick(false, velocity).velocity.y, -20.0);
}

// -----------------------------------------------------------------------------
// Horizontal motion
// -----------------------------------------------------------------------------

#[test]
fn test_move_toward_caps_step_and_lands_on_target() {
    assert_eq!(move_toward(0.0, 10.0, 3.0), 3.0);
    assert_eq!(move_toward(9.0, 10.0, 3.0), 10.0);
    assert_eq!(move_toward(0.0, -10.0, 3.0), -3.0);
    assert_eq!(move_toward(5.0, 5.0, 0.0), 5.0);
}

#[test]
fn test_zero_dt_leaves_horizontal_velocity() {
    let mut rig = Rig::new();
    rig.latch.on_move_performed(1.0);

    let zero = TickContext {
        dt: 0.0,
        gravity_y: GRAVITY,
    };
    for _ in 0..5 {
        let out = rig
            .state
            .step(&mut rig.latch, &rig.tuning, true, Vec2::new(2.0, 0.0), zero);
        assert_eq!(out.velocity.x, 2.0);
    }
}

#[test]
fn test_horizontal_ramp_is_monotonic_without_overshoot() {
    let mut rig = Rig::new();
    rig.tuning.acceleration = 16.0;
    rig.latch.on_move_performed(-0.5);
    let target = -5.0;

    let mut vx = 0.0;
    for _ in 0..10 {
        let out = rig.tick(true, Vec2::new(vx, 0.0));
        assert!(out.velocity.x <= vx);
        assert!(out.velocity.x >= target);
        vx = out.velocity.x;
    }

    assert_eq!(vx, target);
}

#[test]
fn test_zero_dt_does_not_advance_timers() {
    let mut rig = Rig::new();
    rig.tick(true, Vec2::ZERO);
    let before = rig.state;

    let zero = TickContext {
        dt: 0.0,
        gravity_y: GRAVITY,
    };
    rig.state
        .step(&mut rig.latch, &rig.tuning, false, Vec2::ZERO, zero);

    assert_eq!(rig.state.coyote_timer, before.coyote_timer);
}

#[test]
fn test_non_finite_velocity_is_treated_as_rest() {
    let mut rig = Rig::new();
    let out = rig.tick(true, Vec2::new(f32::NAN, f32::INFINITY));

    assert!(out.velocity.x.is_finite());
    assert!(out.velocity.y.is_finite());
}

#[test]
fn test_tap_jump_height() {
    let tuning = tuning();
    // (10 * 0.5)^2 / (2 * 10)
    assert_eq!(tuning.tap_jump_height(GRAVITY), 1.25);
    assert!(tuning.tap_jump_height(0.0).is_infinite());
}

#[test]
fn test_ground_sensor_spans_body_width() {
    let body = BodyDef {
        size: (30.0, 50.0),
        sensor_offset: (0.0, -25.0),
        sensor_height: 3.0,
    };
    let tuning = MovementTuning::from_defs(&MovementDef::default(), &body);

    assert_eq!(tuning.sensor_size, Vec2::new(30.0, 3.0));
    assert_eq!(tuning.sensor_offset, Vec2::new(0.0, -25.0));
}
