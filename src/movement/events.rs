//! Movement domain: contact transition messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when an entity's grounded state flips
#[derive(Debug, Clone, Copy)]
pub struct GroundedChanged {
    pub entity: Entity,
    pub grounded: bool,
}

impl Message for GroundedChanged {}
