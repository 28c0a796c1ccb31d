//! Movement domain: per-step movement submission and velocity resolution.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AvianBody, MovementDriver, MovementInput, Player, VelocityArbiter};

pub(crate) fn record_movement_input(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementDriver, With<Player>>,
) {
    for mut driver in &mut query {
        driver.set_input(input.axis, input.dash_held);
    }
}

pub(crate) fn submit_movement(
    time: Res<Time>,
    mut query: Query<(&MovementDriver, &mut VelocityArbiter, Option<&LinearVelocity>)>,
) {
    let dt = time.delta_secs();

    for (driver, mut arbiter, velocity) in &mut query {
        let current = velocity.map_or(Vec2::ZERO, |v| v.0);
        arbiter.submit(driver.step(current, dt));
    }
}

pub(crate) fn begin_motion_step(mut query: Query<&mut VelocityArbiter>) {
    for mut arbiter in &mut query {
        arbiter.begin_step();
    }
}

pub(crate) fn resolve_velocity(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut VelocityArbiter,
        Option<&mut LinearVelocity>,
        Option<&mut GravityScale>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut arbiter, velocity, gravity) in &mut query {
        let mut body = velocity.map(|velocity| AvianBody {
            velocity: velocity.into_inner(),
            gravity: gravity.map(Mut::into_inner),
        });

        // A missing body is reported by the arbiter itself
        if let Ok(resolution) = arbiter.resolve_and_apply(dt, body.as_mut()) {
            if !resolution.is_empty() {
                trace!(
                    "Resolved {:?}: {:?} at {:?} ({} submitted, {} suppressed, override={})",
                    entity,
                    resolution.total,
                    resolution.priority,
                    resolution.submitted,
                    resolution.suppressed,
                    arbiter.is_override_active()
                );
            }
        }
    }
}
