//! Jumping domain: kick off a wall.

use bevy::prelude::*;

use crate::jumping::strategy::JumpStrategy;
use crate::movement::{ContactSensors, MotionKind, MotionPriority, MotionRequest, WallSide};

/// Default window during which lateral input cannot cancel the kick.
pub const DEFAULT_WALL_JUMP_OVERRIDE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct WallJump {
    horizontal_force: f32,
    vertical_force: f32,
    override_duration: f32,
}

impl WallJump {
    pub fn new(horizontal_force: f32, vertical_force: f32) -> Self {
        Self {
            horizontal_force,
            vertical_force,
            override_duration: DEFAULT_WALL_JUMP_OVERRIDE,
        }
    }

    pub fn with_override_duration(mut self, seconds: f32) -> Self {
        self.override_duration = seconds;
        self
    }

    /// +1 away from a left wall, -1 away from a right wall, 0 when wedged
    /// between two walls.
    fn push_direction(contacts: &dyn ContactSensors) -> f32 {
        match (
            contacts.is_wall_colliding(WallSide::Left),
            contacts.is_wall_colliding(WallSide::Right),
        ) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl JumpStrategy for WallJump {
    fn name(&self) -> &'static str {
        "wall"
    }

    fn can_jump(&self, contacts: &dyn ContactSensors, _now: f32) -> bool {
        contacts.is_touching_wall()
    }

    fn jump(&mut self, contacts: &dyn ContactSensors, _now: f32) -> MotionRequest {
        let direction = Self::push_direction(contacts);
        debug!("Wall jump: push direction {direction}");
        MotionRequest::new(
            Vec2::new(direction * self.horizontal_force, self.vertical_force),
            MotionPriority::Override,
            MotionKind::WallJump,
        )
    }

    fn has_override(&self) -> bool {
        true
    }

    fn override_duration(&self) -> f32 {
        self.override_duration
    }
}
