//! Jumping domain: extra jumps in mid-air.

use bevy::prelude::*;

use crate::jumping::strategy::{JumpReleaseListener, JumpStrategy};
use crate::jumping::variable_height::VariableHeightTracker;
use crate::movement::{ContactSensors, MotionRequest, TimedMotionRequest};

/// Grants `max_extra_jumps` jumps that regenerate when the ground is touched.
#[derive(Debug, Clone)]
pub struct MultiJump {
    force: f32,
    max_extra_jumps: u32,
    extra_jumps_used: u32,
    variable_height: Option<VariableHeightTracker>,
}

impl MultiJump {
    pub fn new(force: f32, max_extra_jumps: u32) -> Self {
        Self {
            force,
            max_extra_jumps,
            extra_jumps_used: 0,
            variable_height: None,
        }
    }

    pub fn with_variable_height(mut self, tracker: VariableHeightTracker) -> Self {
        self.variable_height = Some(tracker);
        self
    }

    pub fn extra_jumps_used(&self) -> u32 {
        self.extra_jumps_used
    }

    pub fn extra_jumps_remaining(&self) -> u32 {
        self.max_extra_jumps.saturating_sub(self.extra_jumps_used)
    }
}

impl JumpStrategy for MultiJump {
    fn name(&self) -> &'static str {
        "multi"
    }

    fn can_jump(&self, _contacts: &dyn ContactSensors, _now: f32) -> bool {
        self.extra_jumps_used < self.max_extra_jumps
    }

    fn jump(&mut self, _contacts: &dyn ContactSensors, _now: f32) -> MotionRequest {
        self.extra_jumps_used += 1;
        debug!(
            "Air jump: extra_jumps_remaining now {}",
            self.extra_jumps_remaining()
        );
        if let Some(tracker) = self.variable_height.as_mut() {
            tracker.notify_jump_started();
        }
        MotionRequest::jump(self.force)
    }

    fn is_persistent_force(&self) -> bool {
        self.variable_height.is_some()
    }

    fn persistent_jump(&mut self) -> TimedMotionRequest {
        self.variable_height
            .as_ref()
            .map_or(TimedMotionRequest::NONE, |tracker| {
                tracker.persistent_request()
            })
    }

    fn on_grounded_changed(&mut self, grounded: bool, _now: f32) {
        if grounded {
            self.extra_jumps_used = 0;
        }
    }

    fn tick(&mut self, dt: f32) {
        if let Some(tracker) = self.variable_height.as_mut() {
            tracker.tick(dt);
        }
    }

    fn take_gravity_scale_change(&mut self) -> Option<f32> {
        self.variable_height
            .as_mut()
            .and_then(|tracker| tracker.take_gravity_change())
    }

    fn release_listener(&mut self) -> Option<&mut dyn JumpReleaseListener> {
        self.variable_height
            .as_mut()
            .map(|tracker| tracker as &mut dyn JumpReleaseListener)
    }
}
