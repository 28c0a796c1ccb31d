//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Ray probes used by the contact sensing systems.
///
/// A probe with an empty layer mask is a configuration error; it is disabled
/// at spawn and reports no contact for the rest of its lifetime.
#[derive(Component, Debug, Clone)]
pub struct ContactProbe {
    pub ground_mask: LayerMask,
    pub wall_mask: LayerMask,
    /// How far below the feet the ground ray reaches
    pub ground_distance: f32,
    /// How far past the body's side the wall rays reach
    pub wall_distance: f32,
    pub ground_enabled: bool,
    pub wall_enabled: bool,
}

impl ContactProbe {
    pub fn new(
        ground_layers: &[GameLayer],
        wall_layers: &[GameLayer],
        ground_distance: f32,
        wall_distance: f32,
    ) -> Self {
        let ground_mask = mask_of(ground_layers);
        let wall_mask = mask_of(wall_layers);

        let ground_enabled = ground_mask != LayerMask::NONE;
        if !ground_enabled {
            error!("Ground probe has no contact layers set, ground detection disabled");
        }
        let wall_enabled = wall_mask != LayerMask::NONE;
        if !wall_enabled {
            error!("Wall probe has no contact layers set, wall detection disabled");
        }

        Self {
            ground_mask,
            wall_mask,
            ground_distance,
            wall_distance,
            ground_enabled,
            wall_enabled,
        }
    }
}

fn mask_of(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}
