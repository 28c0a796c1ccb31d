//! Jumping domain: pluggable jump strategies and their scheduler.

mod coyote;
mod multi;
mod regular;
mod scheduler;
mod strategy;
mod systems;
mod variable_height;
mod wall;


pub use multi::MultiJump;
pub use regular::RegularJump;
pub use scheduler::JumpScheduler;
pub use strategy::JumpStrategy;
pub use variable_height::{GravitySwitch, VariableHeightTracker};
pub use wall::WallJump;

use bevy::prelude::*;

use crate::jumping::systems::{
    forward_grounded_changes, handle_jump_edges, step_jump_schedulers, sync_jump_freeze,
};
use crate::movement::MotionSet;

pub struct JumpingPlugin;

impl Plugin for JumpingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_jump_freeze, forward_grounded_changes, handle_jump_edges)
                .chain()
                .in_set(MotionSet::Edges),
        )
        .add_systems(FixedUpdate, step_jump_schedulers.in_set(MotionSet::Schedule));
    }
}
