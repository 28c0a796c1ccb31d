//! Content domain: motion tuning loaded from assets/data/motion.ron.

mod data;
mod loader;
mod validation;

pub use data::{JumpDef, MotionConfig, MovementDef, VariableHeightDef};
pub use loader::load_motion_config_or_default;

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

pub const MOTION_CONFIG_PATH: &str = "assets/data/motion.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = load_motion_config_or_default(Path::new(MOTION_CONFIG_PATH));

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_timestep_hz))
            .insert_resource(Gravity(Vec2::NEG_Y * config.gravity))
            .insert_resource(config);
    }
}
