//! Data definitions for the motion tuning file.
//!
//! These structs mirror the structure of assets/data/motion.ron and are used
//! for deserialization. Bootstrap turns them into strategies and components.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root (motion.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct MotionConfig {
    pub schema_version: u32,
    /// Physics steps per second
    pub fixed_timestep_hz: f64,
    /// World gravity, pixels per second squared, pointing down
    pub gravity: f32,
    pub body: BodyDef,
    pub sensors: SensorDef,
    /// Jump strategies in selection order
    pub jumps: Vec<JumpDef>,
    pub movement: MovementDef,
}

// ============================================================================
// Body and sensors
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyDef {
    pub width: f32,
    pub height: f32,
    /// Baseline gravity scale; 0 for top-down bodies
    pub gravity_scale: f32,
    pub spawn: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SensorDef {
    pub ground_layers: Vec<GameLayer>,
    pub wall_layers: Vec<GameLayer>,
    pub ground_distance: f32,
    pub wall_distance: f32,
}

// ============================================================================
// Jumps
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum JumpDef {
    Regular {
        force: f32,
        #[serde(default)]
        coyote_time: Option<f32>,
        #[serde(default)]
        variable_height: Option<VariableHeightDef>,
    },
    Multi {
        force: f32,
        max_extra_jumps: u32,
        #[serde(default)]
        variable_height: Option<VariableHeightDef>,
    },
    Wall {
        horizontal_force: f32,
        vertical_force: f32,
        #[serde(default)]
        override_duration: Option<f32>,
    },
}

impl JumpDef {
    pub fn kind_name(&self) -> &'static str {
        match self {
            JumpDef::Regular { .. } => "Regular",
            JumpDef::Multi { .. } => "Multi",
            JumpDef::Wall { .. } => "Wall",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VariableHeightDef {
    pub held_force: f32,
    pub max_hold_time: f32,
    /// Gravity scale while the button is held; unset keeps gravity untouched
    #[serde(default)]
    pub jump_gravity_scale: Option<f32>,
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum MovementDef {
    Cardinal {
        speed: f32,
        #[serde(default)]
        dash_speed: Option<f32>,
    },
    SideToSide {
        speed: f32,
        #[serde(default)]
        dash_speed: Option<f32>,
    },
    Momentum {
        acceleration: f32,
        speed_cap: f32,
        #[serde(default)]
        dash_speed_cap: Option<f32>,
    },
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            fixed_timestep_hz: 50.0,
            gravity: 1800.0,
            body: BodyDef {
                width: 24.0,
                height: 48.0,
                gravity_scale: 1.0,
                spawn: (0.0, 100.0),
            },
            sensors: SensorDef {
                ground_layers: vec![GameLayer::Ground],
                wall_layers: vec![GameLayer::Wall],
                ground_distance: 4.0,
                wall_distance: 4.0,
            },
            jumps: vec![
                JumpDef::Regular {
                    force: 680.0,
                    coyote_time: Some(0.12),
                    variable_height: Some(VariableHeightDef {
                        held_force: 520.0,
                        max_hold_time: 0.18,
                        jump_gravity_scale: Some(0.6),
                    }),
                },
                JumpDef::Wall {
                    horizontal_force: 400.0,
                    vertical_force: 600.0,
                    override_duration: Some(0.2),
                },
                JumpDef::Multi {
                    force: 600.0,
                    max_extra_jumps: 1,
                    variable_height: None,
                },
            ],
            movement: MovementDef::SideToSide {
                speed: 320.0,
                dash_speed: Some(900.0),
            },
        }
    }
}
