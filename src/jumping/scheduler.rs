//! Jumping domain: ordered jump selection and timed request upkeep.

use bevy::prelude::*;

use crate::jumping::strategy::{JumpReleaseListener, JumpStrategy};
use crate::movement::{ContactSensors, MotionKind, TimedMotionRequest, VelocityArbiter};

/// Edge-driven jump coordinator for one entity.
///
/// On a press edge the strategies are tried strictly in list order and the
/// first eligible one jumps; the rest are skipped for that edge. Persistent
/// forces from the winner are kept here and resubmitted to the arbiter every
/// physics step until they expire or a release edge cancels them.
#[derive(Component)]
pub struct JumpScheduler {
    strategies: Vec<Box<dyn JumpStrategy>>,
    release_listeners: Vec<Box<dyn JumpReleaseListener>>,
    active: Vec<TimedMotionRequest>,
    frozen: bool,
    disabled: bool,
}

impl JumpScheduler {
    /// An empty strategy list is a configuration error: the scheduler logs it
    /// and stays disabled, turning every call into a no-op.
    pub fn new(strategies: Vec<Box<dyn JumpStrategy>>) -> Self {
        let disabled = strategies.is_empty();
        if disabled {
            error!("JumpScheduler created without jump strategies, jumping disabled");
        }
        Self {
            strategies,
            release_listeners: Vec::new(),
            active: Vec::new(),
            frozen: false,
            disabled,
        }
    }

    pub fn with_release_listener(mut self, listener: Box<dyn JumpReleaseListener>) -> Self {
        self.release_listeners.push(listener);
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freezing keeps all state but ignores presses and pauses timed requests.
    pub fn set_frozen(&mut self, frozen: bool) {
        if self.frozen != frozen {
            debug!("JumpScheduler frozen={frozen}");
        }
        self.frozen = frozen;
    }

    pub fn active_requests(&self) -> &[TimedMotionRequest] {
        &self.active
    }

    /// Whether a variable-height push is still running, i.e. the jump button
    /// is expected to be held.
    pub fn is_holding_jump(&self) -> bool {
        self.active
            .iter()
            .any(|timed| timed.kind() == MotionKind::VariableHeight)
    }

    /// Handle a jump-press edge. Returns the name of the strategy that jumped.
    pub fn on_jump_pressed(
        &mut self,
        contacts: &dyn ContactSensors,
        now: f32,
        arbiter: &mut VelocityArbiter,
    ) -> Option<&'static str> {
        if self.disabled || self.frozen {
            return None;
        }

        let strategy = self
            .strategies
            .iter_mut()
            .find(|strategy| strategy.can_jump(contacts, now))?;

        let request = strategy.jump(contacts, now);
        arbiter.submit(request);

        if strategy.is_persistent_force() {
            let timed = strategy.persistent_jump();
            if timed.is_expired() {
                warn!(
                    "{} jump returned a persistent request with no duration",
                    strategy.name()
                );
            } else {
                self.active.push(timed);
            }
        }

        if strategy.has_override() {
            arbiter.activate_override(strategy.override_duration());
        }

        debug!(
            "{} jump: {} {:?} at {:?}",
            strategy.name(),
            request.kind,
            request.vector,
            request.priority
        );
        Some(strategy.name())
    }

    /// Handle a jump-release edge. Variable-height pushes are cancelled
    /// immediately, whatever their remaining duration.
    pub fn on_jump_released(&mut self) {
        if self.disabled {
            return;
        }

        self.active
            .retain(|timed| timed.kind() != MotionKind::VariableHeight);

        for strategy in &mut self.strategies {
            if let Some(listener) = strategy.release_listener() {
                listener.jump_release();
            }
        }
        for listener in &mut self.release_listeners {
            listener.jump_release();
        }
    }

    /// Fan a grounded-state edge out to every strategy.
    pub fn notify_grounded(&mut self, grounded: bool, now: f32) {
        for strategy in &mut self.strategies {
            strategy.on_grounded_changed(grounded, now);
        }
    }

    /// Run once per physics step, before the arbiter resolves.
    ///
    /// While frozen, timers and timed requests stay paused, but gravity-scale
    /// changes still reach the arbiter so a release restores the base scale.
    pub fn fixed_step(&mut self, dt: f32, arbiter: &mut VelocityArbiter) {
        if self.disabled {
            return;
        }

        for strategy in &mut self.strategies {
            if !self.frozen {
                strategy.tick(dt);
            }
            if let Some(scale) = strategy.take_gravity_scale_change() {
                arbiter.request_gravity_scale(scale);
            }
        }

        if self.frozen {
            return;
        }

        self.active.retain_mut(|timed| {
            let expired = timed.tick(dt);
            arbiter.submit(timed.request);
            !expired
        });

        debug_assert!(
            self.active.iter().all(|timed| !timed.is_expired()),
            "expired timed request left in the active list"
        );
    }
}

impl std::fmt::Debug for JumpScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JumpScheduler")
            .field("strategies", &self.strategy_names())
            .field("release_listeners", &self.release_listeners.len())
            .field("active", &self.active)
            .field("frozen", &self.frozen)
            .field("disabled", &self.disabled)
            .finish()
    }
}
