//! Movement domain: contact predicates consumed by jump strategies.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl WallContact {
    pub fn from_sides(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, true) => WallContact::Both,
            (true, false) => WallContact::Left,
            (false, true) => WallContact::Right,
            (false, false) => WallContact::None,
        }
    }

    pub fn touches(self, side: WallSide) -> bool {
        matches!(
            (self, side),
            (WallContact::Both, _)
                | (WallContact::Left, WallSide::Left)
                | (WallContact::Right, WallSide::Right)
        )
    }
}

/// Ground and wall predicates reported by the physics layer each step.
pub trait ContactSensors {
    fn is_grounded(&self) -> bool;
    fn is_wall_colliding(&self, side: WallSide) -> bool;

    fn is_touching_wall(&self) -> bool {
        self.is_wall_colliding(WallSide::Left) || self.is_wall_colliding(WallSide::Right)
    }
}

/// Latest sensor readings for an entity, written by the collision systems.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    pub grounded: bool,
    pub wall: WallContact,
}

impl ContactState {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            wall: WallContact::None,
        }
    }

    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn on_wall(wall: WallContact) -> Self {
        Self {
            grounded: false,
            wall,
        }
    }
}

impl ContactSensors for ContactState {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn is_wall_colliding(&self, side: WallSide) -> bool {
        self.wall.touches(side)
    }
}
