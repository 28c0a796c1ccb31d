//! Jumping domain: systems bridging input, contacts, and the schedulers.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::JumpFreeze;
use crate::jumping::JumpScheduler;
use crate::movement::{ContactState, GroundedChanged, MovementInput, Player, VelocityArbiter};

pub(crate) fn sync_jump_freeze(freeze: Res<JumpFreeze>, mut query: Query<&mut JumpScheduler>) {
    let frozen = freeze.is_frozen();
    for mut scheduler in &mut query {
        scheduler.set_frozen(frozen);
    }
}

pub(crate) fn forward_grounded_changes(
    time: Res<Time>,
    mut grounded_events: MessageReader<GroundedChanged>,
    mut query: Query<&mut JumpScheduler>,
) {
    let now = time.elapsed_secs();
    for event in grounded_events.read() {
        if let Ok(mut scheduler) = query.get_mut(event.entity) {
            scheduler.notify_grounded(event.grounded, now);
        }
    }
}

pub(crate) fn handle_jump_edges(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(Entity, &mut JumpScheduler, &ContactState, &mut VelocityArbiter), With<Player>>,
) {
    let now = time.elapsed_secs();

    for (entity, mut scheduler, contacts, mut arbiter) in &mut query {
        if input.jump_just_pressed {
            match scheduler.on_jump_pressed(contacts, now, &mut arbiter) {
                Some(name) => info!("Jump: entity={:?} strategy={}", entity, name),
                None => debug!(
                    "Jump pressed with no eligible strategy: entity={:?} frozen={} disabled={}",
                    entity,
                    scheduler.is_frozen(),
                    scheduler.is_disabled()
                ),
            }
        }
        // A button that is no longer held ends the hold even if the release
        // edge was missed, e.g. while the window lost focus
        let released =
            input.jump_just_released || (!input.jump_held && scheduler.is_holding_jump());
        if released {
            scheduler.on_jump_released();
        }
    }
}

pub(crate) fn step_jump_schedulers(
    time: Res<Time>,
    mut query: Query<(&mut JumpScheduler, &mut VelocityArbiter)>,
) {
    let dt = time.delta_secs();
    for (mut scheduler, mut arbiter) in &mut query {
        scheduler.fixed_step(dt, &mut arbiter);
    }
}
