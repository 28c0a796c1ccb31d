//! Movement domain: system modules for sensing, input, and velocity updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use collisions::{detect_ground, detect_walls};
pub(crate) use input::read_input;
pub(crate) use motion::{
    begin_motion_step, record_movement_input, resolve_velocity, submit_movement,
};
