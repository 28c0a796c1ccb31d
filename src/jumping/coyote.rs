//! Jumping domain: coyote time grace window.

/// Keeps a ground jump available for a short window after walking off a
/// ledge. Driven purely by grounded transitions and timestamps.
#[derive(Debug, Clone)]
pub struct CoyoteTracker {
    max_grace_window: f32,
    grounded: bool,
    last_grounded_at: f32,
    /// Set by a jump, cleared on landing
    consumed: bool,
}

impl CoyoteTracker {
    pub fn new(max_grace_window: f32) -> Self {
        Self {
            max_grace_window,
            grounded: false,
            last_grounded_at: f32::NEG_INFINITY,
            consumed: false,
        }
    }

    pub fn on_grounded_changed(&mut self, grounded: bool, now: f32) {
        if grounded {
            self.consumed = false;
        } else if self.grounded {
            self.last_grounded_at = now;
        }
        self.grounded = grounded;
    }

    pub fn within_threshold(&self, now: f32) -> bool {
        if self.grounded {
            return true;
        }
        !self.consumed && now - self.last_grounded_at <= self.max_grace_window
    }

    /// Seconds of grace left at `now`; the full window while grounded.
    pub fn remaining(&self, now: f32) -> f32 {
        if self.grounded {
            return self.max_grace_window;
        }
        if self.consumed {
            return 0.0;
        }
        (self.max_grace_window - (now - self.last_grounded_at)).max(0.0)
    }

    /// Spend the window so leaving the ground after a jump does not reopen it.
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}
