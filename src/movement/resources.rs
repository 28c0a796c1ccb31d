//! Movement domain: input resources.

use bevy::prelude::*;

/// Input sampled once per frame. The axis is level-based; the jump fields
/// are press/release edges plus the held level.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub jump_held: bool,
    pub dash_held: bool,
}
