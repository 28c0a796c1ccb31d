//! Movement domain: pluggable lateral and top-down movement strategies.

use bevy::prelude::*;

use crate::movement::request::MotionRequest;

/// Everything a movement strategy may look at for one physics step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementContext {
    /// Latest 2-axis input, level-based
    pub input: Vec2,
    /// Body velocity before this step's write
    pub velocity: Vec2,
    pub dashing: bool,
    pub dt: f32,
}

pub trait MovementStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Map this step's input to a single request.
    fn movement(&self, ctx: &MovementContext) -> MotionRequest;
}

/// Picks the dash speed while dashing, when the strategy has one.
fn effective_speed(base: f32, dash_speed: Option<f32>, dashing: bool) -> f32 {
    match dash_speed {
        Some(dash) if dashing => dash,
        _ => base,
    }
}

/// Eight-way movement on both axes, normalized so diagonals are not faster.
#[derive(Debug, Clone)]
pub struct CardinalMovement {
    pub speed: f32,
    pub dash_speed: Option<f32>,
}

impl MovementStrategy for CardinalMovement {
    fn name(&self) -> &'static str {
        "cardinal"
    }

    fn movement(&self, ctx: &MovementContext) -> MotionRequest {
        let speed = effective_speed(self.speed, self.dash_speed, ctx.dashing);
        MotionRequest::movement(ctx.input.normalize_or_zero() * speed)
    }
}

/// Platformer movement: horizontal only, gravity owns the vertical axis.
#[derive(Debug, Clone)]
pub struct SideToSideMovement {
    pub speed: f32,
    pub dash_speed: Option<f32>,
}

impl MovementStrategy for SideToSideMovement {
    fn name(&self) -> &'static str {
        "side_to_side"
    }

    fn movement(&self, ctx: &MovementContext) -> MotionRequest {
        let speed = effective_speed(self.speed, self.dash_speed, ctx.dashing);
        MotionRequest::movement(Vec2::new(ctx.input.x * speed, 0.0))
    }
}

/// Top-down movement that accelerates toward the input direction and keeps
/// its momentum, never exceeding the speed cap.
#[derive(Debug, Clone)]
pub struct MomentumMovement {
    pub acceleration: f32,
    pub speed_cap: f32,
    pub dash_speed_cap: Option<f32>,
}

impl MovementStrategy for MomentumMovement {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn movement(&self, ctx: &MovementContext) -> MotionRequest {
        let cap = effective_speed(self.speed_cap, self.dash_speed_cap, ctx.dashing);
        let accelerated = ctx.velocity + ctx.input * self.acceleration * ctx.dt;
        MotionRequest::movement(accelerated.clamp_length_max(cap))
    }
}

/// Holds the active movement strategy and the latest input for an entity.
#[derive(Component)]
pub struct MovementDriver {
    strategy: Box<dyn MovementStrategy>,
    input: Vec2,
    dashing: bool,
}

impl MovementDriver {
    pub fn new(strategy: Box<dyn MovementStrategy>) -> Self {
        Self {
            strategy,
            input: Vec2::ZERO,
            dashing: false,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Last value wins until superseded.
    pub fn set_input(&mut self, input: Vec2, dashing: bool) {
        self.input = input;
        self.dashing = dashing;
    }

    pub fn input(&self) -> Vec2 {
        self.input
    }

    /// The request for this physics step.
    pub fn step(&self, velocity: Vec2, dt: f32) -> MotionRequest {
        self.strategy.movement(&MovementContext {
            input: self.input,
            velocity,
            dashing: self.dashing,
            dt,
        })
    }
}

impl std::fmt::Debug for MovementDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovementDriver")
            .field("strategy", &self.strategy.name())
            .field("input", &self.input)
            .field("dashing", &self.dashing)
            .finish()
    }
}
