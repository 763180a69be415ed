//! Movement domain: keyboard sampling into each player's input latch.

use bevy::prelude::*;

use crate::movement::{InputLatch, Player};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 4] = [KeyCode::Space, KeyCode::KeyK, KeyCode::KeyW, KeyCode::ArrowUp];

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut InputLatch, With<Player>>,
) {
    let mut x = 0.0;
    if keyboard.any_pressed(LEFT_KEYS) {
        x -= 1.0;
    }
    if keyboard.any_pressed(RIGHT_KEYS) {
        x += 1.0;
    }

    let jump_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    let jump_released = keyboard.any_just_released(JUMP_KEYS);
    let jump_down = keyboard.any_pressed(JUMP_KEYS);

    for mut latch in &mut query {
        dispatch_move(&mut latch, x);
        dispatch_jump(&mut latch, jump_pressed, jump_released, jump_down);
    }
}

/// Raise move-performed or move-canceled when the sampled axis differs from the latch.
pub(crate) fn dispatch_move(latch: &mut InputLatch, axis: f32) {
    if axis == latch.move_axis() {
        return;
    }

    if axis != 0.0 {
        latch.on_move_performed(axis);
    } else {
        latch.on_move_canceled();
    }
}

/// Turn one frame of jump key edges into latch notifications.
///
/// When both edges land in the same frame the current key level decides their
/// order: a key still down was released then pressed again. A key that is up while
/// the latch still reads held lost its release edge (e.g. released while paused),
/// so the release is raised now.
pub(crate) fn dispatch_jump(latch: &mut InputLatch, pressed: bool, released: bool, down: bool) {
    match (pressed, released) {
        (true, true) if down => {
            latch.on_jump_canceled();
            latch.on_jump_performed();
        }
        (true, true) => {
            latch.on_jump_performed();
            latch.on_jump_canceled();
        }
        (true, false) => latch.on_jump_performed(),
        (false, true) => latch.on_jump_canceled(),
        (false, false) if !down && latch.jump_held() => latch.on_jump_canceled(),
        (false, false) => {}
    }
}
