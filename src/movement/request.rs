//! Movement domain: motion requests submitted to the velocity arbiter.

use bevy::prelude::*;

/// Priority of a motion request. Only the requests sharing the highest
/// priority present in a step contribute to the applied velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MotionPriority {
    #[default]
    Error,
    Low,
    Normal,
    High,
    Override,
}

/// What produced a request. Drives the arbiter's vertical handling and the
/// scheduler's release cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionKind {
    #[default]
    None,
    Movement,
    Jump,
    VariableHeight,
    WallJump,
}

impl MotionKind {
    pub fn label(self) -> &'static str {
        match self {
            MotionKind::None => "Error",
            MotionKind::Movement => "Movement",
            MotionKind::Jump => "Jump",
            MotionKind::VariableHeight => "VariableHeight",
            MotionKind::WallJump => "Walljump",
        }
    }

    /// Jump impulses replace any residual vertical velocity instead of
    /// stacking on top of it.
    pub fn resets_vertical(self) -> bool {
        matches!(self, MotionKind::Jump)
    }

    /// Whether a zero vertical component from this kind is a real "set y to
    /// zero" intent. Lateral movement on a body under gravity only speaks
    /// for the horizontal axis.
    pub fn expresses_vertical(self) -> bool {
        !matches!(self, MotionKind::Movement | MotionKind::None)
    }
}

impl std::fmt::Display for MotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single step's velocity contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRequest {
    pub vector: Vec2,
    pub priority: MotionPriority,
    pub kind: MotionKind,
}

impl MotionRequest {
    /// Zero request returned by strategies with nothing to contribute.
    pub const NONE: Self = Self {
        vector: Vec2::ZERO,
        priority: MotionPriority::Error,
        kind: MotionKind::None,
    };

    pub const fn new(vector: Vec2, priority: MotionPriority, kind: MotionKind) -> Self {
        Self {
            vector,
            priority,
            kind,
        }
    }

    pub fn movement(vector: Vec2) -> Self {
        Self::new(vector, MotionPriority::Normal, MotionKind::Movement)
    }

    pub fn jump(force: f32) -> Self {
        Self::new(Vec2::new(0.0, force), MotionPriority::Normal, MotionKind::Jump)
    }
}

impl Default for MotionRequest {
    fn default() -> Self {
        Self::NONE
    }
}

/// A request that is resubmitted every physics step until its duration runs
/// out or a release edge cancels it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedMotionRequest {
    pub request: MotionRequest,
    /// Seconds left before the request expires
    pub remaining: f32,
}

impl TimedMotionRequest {
    pub const NONE: Self = Self {
        request: MotionRequest::NONE,
        remaining: 0.0,
    };

    pub fn new(request: MotionRequest, duration: f32) -> Self {
        Self {
            request,
            remaining: duration,
        }
    }

    pub fn kind(&self) -> MotionKind {
        self.request.kind
    }

    /// Advance by one physics step. Returns true once the request has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.is_expired()
    }

    /// Expired once the remaining time is within float noise of zero, so a
    /// 0.3s request on a 0.02s step lasts exactly 15 steps.
    pub fn is_expired(&self) -> bool {
        self.remaining <= TIME_EPSILON
    }
}

impl Default for TimedMotionRequest {
    fn default() -> Self {
        Self::NONE
    }
}

/// Tolerance for comparing accumulated step durations against zero.
pub(crate) const TIME_EPSILON: f32 = 1e-4;
