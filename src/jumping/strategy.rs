//! Jumping domain: the capability contract shared by every jump variant.

use crate::movement::{ContactSensors, MotionRequest, TimedMotionRequest};

/// A pluggable jump behavior, tried in list order by the [`JumpScheduler`].
///
/// Only `can_jump` and `jump` are required. The remaining capabilities
/// default to "not persistent, no override".
///
/// [`JumpScheduler`]: crate::jumping::JumpScheduler
pub trait JumpStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn can_jump(&self, contacts: &dyn ContactSensors, now: f32) -> bool;

    /// Perform the jump. Only called right after `can_jump` returned true.
    fn jump(&mut self, contacts: &dyn ContactSensors, now: f32) -> MotionRequest;

    fn is_persistent_force(&self) -> bool {
        false
    }

    /// The request to keep resubmitting after `jump`, with its duration.
    fn persistent_jump(&mut self) -> TimedMotionRequest {
        TimedMotionRequest::NONE
    }

    fn has_override(&self) -> bool {
        false
    }

    fn override_duration(&self) -> f32 {
        0.0
    }

    /// Grounded-state edge from the contact sensors.
    fn on_grounded_changed(&mut self, _grounded: bool, _now: f32) {}

    /// Advance owned timers by one physics step.
    fn tick(&mut self, _dt: f32) {}

    /// A gravity scale this strategy wants written to the body, if it changed.
    fn take_gravity_scale_change(&mut self) -> Option<f32> {
        None
    }

    /// Strategies that care about the jump button being released.
    fn release_listener(&mut self) -> Option<&mut dyn JumpReleaseListener> {
        None
    }
}

pub trait JumpReleaseListener: Send + Sync {
    fn jump_release(&mut self);
}
