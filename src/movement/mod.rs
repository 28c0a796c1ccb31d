//! Movement domain: velocity arbitration, locomotion strategies, and contact sensing.

mod arbiter;
mod body;
mod bootstrap;
mod components;
mod contacts;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod request;
mod resources;
mod strategies;
mod systems;

#[cfg(test)]
mod tests;

pub use arbiter::{ArbiterError, OverrideState, Resolution, VelocityArbiter};
pub use body::{AvianBody, MotionBody};
pub use components::{ContactProbe, GameLayer, Player};
pub use contacts::{ContactSensors, ContactState, WallContact, WallSide};
pub use events::GroundedChanged;
pub use request::{MotionKind, MotionPriority, MotionRequest, TimedMotionRequest};
pub use resources::MovementInput;
pub use strategies::{
    CardinalMovement, MomentumMovement, MovementContext, MovementDriver, MovementStrategy,
    SideToSideMovement,
};

pub(crate) use request::TIME_EPSILON;

#[cfg(test)]
pub(crate) use body::SimpleBody;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    begin_motion_step, detect_ground, detect_walls, read_input, record_movement_input,
    resolve_velocity, submit_movement,
};

/// Ordering of the motion pipeline.
///
/// Update: `Input` samples keys, `Sensors` refreshes contacts, `Edges` turns
/// press/release edges into buffered requests. FixedUpdate: `Schedule` opens
/// the arbiter step and replays persistent jump forces, `Submit` adds
/// locomotion, `Resolve` writes the body.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Input,
    Sensors,
    Edges,
    Schedule,
    Submit,
    Resolve,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<GroundedChanged>()
            .configure_sets(
                Update,
                (MotionSet::Input, MotionSet::Sensors, MotionSet::Edges).chain(),
            )
            .configure_sets(
                FixedUpdate,
                (MotionSet::Schedule, MotionSet::Submit, MotionSet::Resolve).chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, record_movement_input)
                    .chain()
                    .in_set(MotionSet::Input),
            )
            .add_systems(
                Update,
                (detect_ground, detect_walls).in_set(MotionSet::Sensors),
            )
            .add_systems(FixedUpdate, begin_motion_step.in_set(MotionSet::Schedule))
            .add_systems(FixedUpdate, submit_movement.in_set(MotionSet::Submit))
            .add_systems(FixedUpdate, resolve_velocity.in_set(MotionSet::Resolve));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::toggle_cutscene);
    }
}
