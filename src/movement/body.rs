//! Movement domain: the physics body the arbiter writes to.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Write access to the physics body controlled by a [`VelocityArbiter`].
///
/// [`VelocityArbiter`]: crate::movement::VelocityArbiter
pub trait MotionBody {
    fn set_velocity_x(&mut self, x: f32);
    fn set_velocity_y(&mut self, y: f32);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Adapter over the avian2d components of a dynamic body.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    /// Bodies without a `GravityScale` fall at the world gravity (scale 1)
    pub gravity: Option<&'a mut GravityScale>,
}

impl MotionBody for AvianBody<'_> {
    fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity.as_ref().map_or(1.0, |g| g.0)
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        match self.gravity.as_mut() {
            Some(gravity) => gravity.0 = scale,
            None => warn!("Body has no GravityScale component, ignoring scale {scale}"),
        }
    }
}

/// Plain in-memory body for exercising the arbiter without a physics world.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleBody {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

#[cfg(test)]
impl SimpleBody {
    pub fn new(gravity_scale: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale,
        }
    }
}

#[cfg(test)]
impl MotionBody for SimpleBody {
    fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}
