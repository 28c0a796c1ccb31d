//! Jumping domain: ground jump with optional coyote time and variable height.

use bevy::prelude::*;

use crate::jumping::coyote::CoyoteTracker;
use crate::jumping::strategy::{JumpReleaseListener, JumpStrategy};
use crate::jumping::variable_height::VariableHeightTracker;
use crate::movement::{ContactSensors, MotionRequest, TimedMotionRequest};

#[derive(Debug, Clone)]
pub struct RegularJump {
    force: f32,
    coyote: Option<CoyoteTracker>,
    variable_height: Option<VariableHeightTracker>,
}

impl RegularJump {
    pub fn new(force: f32) -> Self {
        Self {
            force,
            coyote: None,
            variable_height: None,
        }
    }

    pub fn with_coyote_time(mut self, max_grace_window: f32) -> Self {
        self.coyote = Some(CoyoteTracker::new(max_grace_window));
        self
    }

    pub fn with_variable_height(mut self, tracker: VariableHeightTracker) -> Self {
        self.variable_height = Some(tracker);
        self
    }
}

impl JumpStrategy for RegularJump {
    fn name(&self) -> &'static str {
        "regular"
    }

    fn can_jump(&self, contacts: &dyn ContactSensors, now: f32) -> bool {
        contacts.is_grounded()
            || self
                .coyote
                .as_ref()
                .is_some_and(|coyote| coyote.within_threshold(now))
    }

    fn jump(&mut self, contacts: &dyn ContactSensors, now: f32) -> MotionRequest {
        if let Some(coyote) = self.coyote.as_mut() {
            if !contacts.is_grounded() {
                debug!(
                    "Coyote jump with {:.3}s of grace left",
                    coyote.remaining(now)
                );
            }
            coyote.consume();
        }
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

    fn on_grounded_changed(&mut self, grounded: bool, now: f32) {
        if let Some(coyote) = self.coyote.as_mut() {
            coyote.on_grounded_changed(grounded, now);
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
