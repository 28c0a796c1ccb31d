//! Movement domain: player bootstrap and data-driven strategy setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{JumpDef, MotionConfig, MovementDef, VariableHeightDef};
use crate::jumping::{
    GravitySwitch, JumpScheduler, JumpStrategy, MultiJump, RegularJump, VariableHeightTracker,
    WallJump,
};
use crate::movement::{
    CardinalMovement, ContactProbe, ContactState, GameLayer, MomentumMovement, MovementDriver,
    MovementStrategy, Player, SideToSideMovement, VelocityArbiter,
};

/// Spawn the player from the loaded motion config.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<MotionConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let scheduler = JumpScheduler::new(build_jump_strategies(&config));
    let driver = MovementDriver::new(build_movement_strategy(&config.movement));
    let probe = ContactProbe::new(
        &config.sensors.ground_layers,
        &config.sensors.wall_layers,
        config.sensors.ground_distance,
        config.sensors.wall_distance,
    );

    info!(
        "Spawning player: jumps={:?}, movement={}, gravity_scale={}",
        scheduler.strategy_names(),
        driver.strategy_name(),
        config.body.gravity_scale
    );

    let body = &config.body;
    commands.spawn((
        // Identity & Motion
        (
            Player,
            ContactState::default(),
            probe,
            VelocityArbiter::new(),
            scheduler,
            driver,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(body.width, body.height)),
            ..default()
        },
        Transform::from_xyz(body.spawn.0, body.spawn.1, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(body.width, body.height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(body.gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

/// Build the jump strategies in configured order.
pub(crate) fn build_jump_strategies(config: &MotionConfig) -> Vec<Box<dyn JumpStrategy>> {
    let base_gravity_scale = config.body.gravity_scale;

    config
        .jumps
        .iter()
        .map(|def| -> Box<dyn JumpStrategy> {
            match def {
                JumpDef::Regular {
                    force,
                    coyote_time,
                    variable_height,
                } => {
                    let mut jump = RegularJump::new(*force);
                    if let Some(window) = coyote_time {
                        jump = jump.with_coyote_time(*window);
                    }
                    if let Some(vh) = variable_height {
                        jump = jump.with_variable_height(build_tracker(vh, base_gravity_scale));
                    }
                    Box::new(jump)
                }
                JumpDef::Multi {
                    force,
                    max_extra_jumps,
                    variable_height,
                } => {
                    let mut jump = MultiJump::new(*force, *max_extra_jumps);
                    if let Some(vh) = variable_height {
                        jump = jump.with_variable_height(build_tracker(vh, base_gravity_scale));
                    }
                    Box::new(jump)
                }
                JumpDef::Wall {
                    horizontal_force,
                    vertical_force,
                    override_duration,
                } => {
                    let mut jump = WallJump::new(*horizontal_force, *vertical_force);
                    if let Some(duration) = override_duration {
                        jump = jump.with_override_duration(*duration);
                    }
                    Box::new(jump)
                }
            }
        })
        .collect()
}

fn build_tracker(def: &VariableHeightDef, base_gravity_scale: f32) -> VariableHeightTracker {
    let tracker = VariableHeightTracker::new(def.held_force, def.max_hold_time);
    match def.jump_gravity_scale {
        Some(jump_scale) => tracker.with_gravity_switch(GravitySwitch {
            jump_scale,
            base_scale: base_gravity_scale,
        }),
        None => tracker,
    }
}

pub(crate) fn build_movement_strategy(def: &MovementDef) -> Box<dyn MovementStrategy> {
    match def {
        MovementDef::Cardinal { speed, dash_speed } => Box::new(CardinalMovement {
            speed: *speed,
            dash_speed: *dash_speed,
        }),
        MovementDef::SideToSide { speed, dash_speed } => Box::new(SideToSideMovement {
            speed: *speed,
            dash_speed: *dash_speed,
        }),
        MovementDef::Momentum {
            acceleration,
            speed_cap,
            dash_speed_cap,
        } => Box::new(MomentumMovement {
            acceleration: *acceleration,
            speed_cap: *speed_cap,
            dash_speed_cap: *dash_speed_cap,
        }),
    }
}
