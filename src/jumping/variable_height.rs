//! Jumping domain: hold-to-jump-higher tracking.

use bevy::prelude::*;

use crate::jumping::strategy::JumpReleaseListener;
use crate::movement::{
    MotionKind, MotionPriority, MotionRequest, TIME_EPSILON, TimedMotionRequest,
};

/// Gravity scales swapped in while the jump button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySwitch {
    pub jump_scale: f32,
    pub base_scale: f32,
}

/// Tracks how long a jump may keep pushing upward.
///
/// The upward push itself travels through the scheduler as a
/// `VariableHeight` timed request; this tracker owns the hold window and the
/// gravity scale that goes with it.
#[derive(Debug, Clone)]
pub struct VariableHeightTracker {
    held_force: f32,
    max_hold_time: f32,
    hold_time: f32,
    holding: bool,
    gravity: Option<GravitySwitch>,
    pending_gravity: Option<f32>,
}

impl VariableHeightTracker {
    pub fn new(held_force: f32, max_hold_time: f32) -> Self {
        Self {
            held_force,
            max_hold_time,
            hold_time: 0.0,
            holding: false,
            gravity: None,
            pending_gravity: None,
        }
    }

    pub fn with_gravity_switch(mut self, gravity: GravitySwitch) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn max_hold_time(&self) -> f32 {
        self.max_hold_time
    }

    pub fn hold_time(&self) -> f32 {
        self.hold_time
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn continuing_request(&self) -> MotionRequest {
        MotionRequest::new(
            Vec2::new(0.0, self.held_force),
            MotionPriority::Normal,
            MotionKind::VariableHeight,
        )
    }

    pub fn persistent_request(&self) -> TimedMotionRequest {
        TimedMotionRequest::new(self.continuing_request(), self.max_hold_time)
    }

    pub fn notify_jump_started(&mut self) {
        self.hold_time = self.max_hold_time;
        self.holding = true;
        if let Some(gravity) = self.gravity {
            self.pending_gravity = Some(gravity.jump_scale);
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.holding {
            return;
        }
        self.hold_time -= dt;
        if self.hold_time <= TIME_EPSILON {
            self.stop();
        }
    }

    pub fn take_gravity_change(&mut self) -> Option<f32> {
        self.pending_gravity.take()
    }

    fn stop(&mut self) {
        self.holding = false;
        self.hold_time = 0.0;
        if let Some(gravity) = self.gravity {
            self.pending_gravity = Some(gravity.base_scale);
        }
    }
}

impl JumpReleaseListener for VariableHeightTracker {
    fn jump_release(&mut self) {
        if self.holding {
            self.stop();
        }
    }
}
