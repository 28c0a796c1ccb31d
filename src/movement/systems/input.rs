//! Movement domain: keyboard sampling into the shared input resource.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// -1, 0 or +1 depending on which side is held; both sides cancel out.
fn key_axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let negative = if keyboard.any_pressed(negative) { 1.0 } else { 0.0 };
    let positive = if keyboard.any_pressed(positive) { 1.0 } else { 0.0 };
    positive - negative
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // The vertical axis only matters to top-down strategies
    input.axis = Vec2::new(
        key_axis(&keyboard, LEFT_KEYS, RIGHT_KEYS),
        key_axis(&keyboard, DOWN_KEYS, UP_KEYS),
    );
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_just_released = keyboard.any_just_released(JUMP_KEYS);
    input.jump_held = keyboard.any_pressed(JUMP_KEYS);
    input.dash_held = keyboard.any_pressed(DASH_KEYS);
}
