//! Movement domain: per-step velocity arbitration.
//!
//! Strategies never touch the physics body directly. They submit
//! [`MotionRequest`]s to the [`VelocityArbiter`] on the player entity, and the
//! arbiter folds everything submitted since the previous physics step into a
//! single velocity write.

use bevy::prelude::*;

use crate::movement::body::MotionBody;
use crate::movement::request::{MotionPriority, MotionRequest, TIME_EPSILON};

/// Temporary suppression of normal priority resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverrideState {
    pub active: bool,
    pub remaining: f32,
}

impl OverrideState {
    /// Arm the override. An override that is already running is only ever
    /// extended, never shortened.
    pub fn activate(&mut self, duration: f32) {
        if duration <= 0.0 {
            return;
        }
        self.remaining = if self.active {
            self.remaining.max(duration)
        } else {
            duration
        };
        self.active = true;
    }

    /// Returns true on the step the override runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= TIME_EPSILON {
            self.active = false;
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterError {
    /// The entity has no physics body to write to.
    MissingBody,
}

impl std::fmt::Display for ArbiterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArbiterError::MissingBody => write!(f, "no physics body to apply velocity to"),
        }
    }
}

impl std::error::Error for ArbiterError {}

/// Outcome of one resolution, returned for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// Priority of the winning group, if any request took part
    pub priority: Option<MotionPriority>,
    /// Sum of the winning vectors
    pub total: Vec2,
    /// Requests in the buffer when resolution started
    pub submitted: usize,
    /// Requests dropped because an override was running
    pub suppressed: usize,
    pub wrote_vertical: bool,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
    }
}

#[derive(Component, Debug, Default)]
pub struct VelocityArbiter {
    buffer: Vec<MotionRequest>,
    override_state: OverrideState,
    pending_gravity_scale: Option<f32>,
    body_missing: bool,
    /// Set by the first resolution of a physics step, cleared by `begin_step`
    step_resolved: bool,
}

impl VelocityArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, request: MotionRequest) {
        self.buffer.push(request);
    }

    /// Requests submitted since the last resolution.
    pub fn pending(&self) -> &[MotionRequest] {
        &self.buffer
    }

    pub fn activate_override(&mut self, duration: f32) {
        self.override_state.activate(duration);
        debug!(
            "Velocity override armed for {:.3}s",
            self.override_state.remaining
        );
    }

    pub fn override_state(&self) -> OverrideState {
        self.override_state
    }

    pub fn is_override_active(&self) -> bool {
        self.override_state.active
    }

    /// Open a new physics step. Only the first resolution after this call
    /// advances the override timer.
    pub fn begin_step(&mut self) {
        self.step_resolved = false;
    }

    /// Queue a gravity-scale write, applied at the start of the next resolution.
    pub fn request_gravity_scale(&mut self, scale: f32) {
        self.pending_gravity_scale = Some(scale);
    }

    /// Resolve every request submitted since the previous step and write the
    /// result to `body`. Runs once per physics step, after `begin_step`.
    ///
    /// The buffer is emptied whether or not a body is available, and the
    /// override only ticks once per step, so a second call in the same step
    /// is a no-op.
    pub fn resolve_and_apply<B>(
        &mut self,
        dt: f32,
        body: Option<&mut B>,
    ) -> Result<Resolution, ArbiterError>
    where
        B: MotionBody + ?Sized,
    {
        let Some(body) = body else {
            self.buffer.clear();
            self.tick_override_once(dt);
            if !self.body_missing {
                self.body_missing = true;
                error!("VelocityArbiter has no physics body, skipping velocity writes");
            }
            return Err(ArbiterError::MissingBody);
        };

        if self.body_missing {
            self.body_missing = false;
            info!("VelocityArbiter physics body available again");
        }

        if let Some(scale) = self.pending_gravity_scale.take() {
            body.set_gravity_scale(scale);
        }

        let resolution = self.resolve_into(body);
        self.buffer.clear();
        self.tick_override_once(dt);

        Ok(resolution)
    }

    fn tick_override_once(&mut self, dt: f32) {
        if self.step_resolved {
            return;
        }
        self.step_resolved = true;
        if self.override_state.tick(dt) {
            debug!("Velocity override expired");
        }
    }

    fn resolve_into<B>(&self, body: &mut B) -> Resolution
    where
        B: MotionBody + ?Sized,
    {
        let overriding = self.override_state.active;
        let eligible = |r: &&MotionRequest| !overriding || r.priority == MotionPriority::Override;

        let mut resolution = Resolution {
            submitted: self.buffer.len(),
            suppressed: self.buffer.iter().filter(|r| !eligible(r)).count(),
            ..default()
        };

        let Some(highest) = self.buffer.iter().filter(eligible).map(|r| r.priority).max() else {
            return resolution;
        };

        let mut total = Vec2::ZERO;
        let mut resets_vertical = false;
        let mut vertical_intent = false;
        for request in self
            .buffer
            .iter()
            .filter(eligible)
            .filter(|r| r.priority == highest)
        {
            total += request.vector;
            resets_vertical |= request.kind.resets_vertical();
            vertical_intent |= request.kind.expresses_vertical();
        }

        if resets_vertical {
            body.set_velocity_y(0.0);
        }

        body.set_velocity_x(total.x);

        // A zero from lateral movement alone is not a request to stop falling.
        let keep_vertical = total.y == 0.0 && body.gravity_scale() != 0.0 && !vertical_intent;
        if !keep_vertical {
            body.set_velocity_y(total.y);
        }

        resolution.priority = Some(highest);
        resolution.total = total;
        resolution.wrote_vertical = !keep_vertical;
        resolution
    }
}
