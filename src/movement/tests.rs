//! Movement domain: tests for arbitration, requests, strategies, and contacts.

use bevy::prelude::Vec2;

use super::body::SimpleBody;
use super::{
    ArbiterError, CardinalMovement, ContactSensors, ContactState, MomentumMovement, MotionKind,
    MotionPriority, MotionRequest, MovementContext, MovementDriver, MovementStrategy,
    OverrideState, SideToSideMovement, TimedMotionRequest, VelocityArbiter, WallContact, WallSide,
};

const DT: f32 = 0.02;

fn wall_kick(x: f32, y: f32) -> MotionRequest {
    MotionRequest::new(
        Vec2::new(x, y),
        MotionPriority::Override,
        MotionKind::WallJump,
    )
}

fn ctx(input: Vec2, velocity: Vec2, dashing: bool) -> MovementContext {
    MovementContext {
        input,
        velocity,
        dashing,
        dt: DT,
    }
}

// -----------------------------------------------------------------------------
// Request tests
// -----------------------------------------------------------------------------

#[test]
fn test_priority_ordering() {
    assert!(MotionPriority::Error < MotionPriority::Low);
    assert!(MotionPriority::Low < MotionPriority::Normal);
    assert!(MotionPriority::Normal < MotionPriority::High);
    assert!(MotionPriority::High < MotionPriority::Override);
    assert_eq!(MotionPriority::default(), MotionPriority::Error);
}

#[test]
fn test_only_jump_resets_vertical() {
    assert!(MotionKind::Jump.resets_vertical());
    for kind in [
        MotionKind::None,
        MotionKind::Movement,
        MotionKind::VariableHeight,
        MotionKind::WallJump,
    ] {
        assert!(!kind.resets_vertical(), "{kind} should not reset vertical");
    }
}

#[test]
fn test_timed_request_lasts_whole_steps() {
    let mut timed = TimedMotionRequest::new(MotionRequest::jump(100.0), 0.3);
    let mut steps = 0;
    while !timed.tick(DT) {
        steps += 1;
    }
    // The expiring step counts too
    assert_eq!(steps + 1, 15);
    assert!(timed.is_expired());
}

#[test]
fn test_none_timed_request_is_expired() {
    assert!(TimedMotionRequest::NONE.is_expired());
    assert_eq!(TimedMotionRequest::default().kind(), MotionKind::None);
}

// -----------------------------------------------------------------------------
// Arbiter resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_highest_priority_group_wins() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(200.0, 0.0)));
    arbiter.submit(MotionRequest::new(
        Vec2::new(-50.0, 10.0),
        MotionPriority::Low,
        MotionKind::Movement,
    ));
    arbiter.submit(MotionRequest::new(
        Vec2::new(30.0, 400.0),
        MotionPriority::High,
        MotionKind::Jump,
    ));

    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(resolution.priority, Some(MotionPriority::High));
    assert_eq!(resolution.submitted, 3);
    assert_eq!(body.velocity, Vec2::new(30.0, 400.0));
}

#[test]
fn test_same_priority_requests_sum() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(200.0, 0.0)));
    arbiter.submit(MotionRequest::jump(680.0));

    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(resolution.total, Vec2::new(200.0, 680.0));
    assert_eq!(body.velocity, Vec2::new(200.0, 680.0));
}

#[test]
fn test_jump_replaces_falling_velocity() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    body.velocity = Vec2::new(0.0, -450.0);

    arbiter.submit(MotionRequest::jump(680.0));
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();

    assert_eq!(body.velocity.y, 680.0);
}

#[test]
fn test_resolution_clears_buffer() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(200.0, 0.0)));
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert!(arbiter.pending().is_empty());

    // A second resolve in the same step writes nothing
    body.velocity.x = 5.0;
    let second = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert!(second.is_empty());
    assert_eq!(body.velocity.x, 5.0);
}

#[test]
fn test_empty_buffer_leaves_body_alone() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    body.velocity = Vec2::new(12.0, -80.0);

    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert!(resolution.priority.is_none());
    assert_eq!(body.velocity, Vec2::new(12.0, -80.0));
}

#[test]
fn test_lateral_movement_keeps_falling_speed() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    body.velocity = Vec2::new(0.0, -300.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(320.0, 0.0)));
    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();

    assert!(!resolution.wrote_vertical);
    assert_eq!(body.velocity, Vec2::new(320.0, -300.0));
}

#[test]
fn test_top_down_movement_writes_both_axes() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(0.0);
    body.velocity = Vec2::new(0.0, 150.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(320.0, 0.0)));
    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();

    assert!(resolution.wrote_vertical);
    assert_eq!(body.velocity, Vec2::new(320.0, 0.0));
}

#[test]
fn test_non_movement_zero_vertical_is_written_under_gravity() {
    for kind in [MotionKind::VariableHeight, MotionKind::WallJump] {
        let mut arbiter = VelocityArbiter::new();
        let mut body = SimpleBody::new(1.0);
        body.velocity = Vec2::new(0.0, -300.0);

        arbiter.submit(MotionRequest::new(
            Vec2::new(150.0, 0.0),
            MotionPriority::Normal,
            kind,
        ));
        let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();

        assert!(resolution.wrote_vertical, "{kind} should write vertical");
        assert_eq!(body.velocity, Vec2::new(150.0, 0.0));
    }
}

#[test]
fn test_mixed_group_with_vertical_kind_writes_zero_vertical() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    body.velocity = Vec2::new(0.0, -300.0);

    arbiter.submit(MotionRequest::movement(Vec2::new(200.0, 0.0)));
    arbiter.submit(MotionRequest::new(
        Vec2::ZERO,
        MotionPriority::Normal,
        MotionKind::VariableHeight,
    ));
    let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();

    assert!(resolution.wrote_vertical);
    assert_eq!(body.velocity, Vec2::new(200.0, 0.0));
}

#[test]
fn test_missing_body_reports_and_drains() {
    let mut arbiter = VelocityArbiter::new();
    arbiter.submit(MotionRequest::movement(Vec2::new(100.0, 0.0)));

    let result = arbiter.resolve_and_apply::<SimpleBody>(DT, None);
    assert!(matches!(result, Err(ArbiterError::MissingBody)));
    assert!(arbiter.pending().is_empty());

    // Recovers once a body shows up
    let mut body = SimpleBody::new(1.0);
    arbiter.submit(MotionRequest::movement(Vec2::new(100.0, 0.0)));
    assert!(arbiter.resolve_and_apply(DT, Some(&mut body)).is_ok());
    assert_eq!(body.velocity.x, 100.0);
}

#[test]
fn test_gravity_scale_applied_on_next_resolve() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);

    arbiter.request_gravity_scale(0.6);
    assert_eq!(body.gravity_scale, 1.0);

    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(body.gravity_scale, 0.6);

    // Consumed: a later scale change on the body is not overwritten
    body.gravity_scale = 1.0;
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(body.gravity_scale, 1.0);
}

// -----------------------------------------------------------------------------
// Override tests
// -----------------------------------------------------------------------------

#[test]
fn test_override_state_only_extends() {
    let mut state = OverrideState::default();
    state.activate(0.5);
    state.activate(0.1);
    assert!(state.active);
    assert_eq!(state.remaining, 0.5);
}

#[test]
fn test_override_ignores_non_positive_duration() {
    let mut state = OverrideState::default();
    state.activate(0.0);
    state.activate(-1.0);
    assert!(!state.active);
}

#[test]
fn test_override_suppresses_lower_priorities_for_its_duration() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    let lateral = MotionRequest::movement(Vec2::new(-320.0, 0.0));

    // Kick off a left wall while still pushing into it
    arbiter.activate_override(0.2);
    arbiter.submit(wall_kick(400.0, 600.0));
    arbiter.submit(lateral);
    let first = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(first.priority, Some(MotionPriority::Override));
    assert_eq!(first.suppressed, 1);
    assert_eq!(body.velocity, Vec2::new(400.0, 600.0));

    // Nine more steps inside the 0.2s window
    for step in 0..9 {
        arbiter.begin_step();
        arbiter.submit(lateral);
        let resolution = arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
        assert!(resolution.is_empty(), "step {step} should be suppressed");
        assert_eq!(body.velocity.x, 400.0);
    }
    assert!(!arbiter.is_override_active());

    arbiter.begin_step();
    arbiter.submit(lateral);
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert_eq!(body.velocity.x, -320.0);
}

#[test]
fn test_override_ticks_without_body() {
    let mut arbiter = VelocityArbiter::new();
    arbiter.activate_override(0.05);

    for _ in 0..3 {
        arbiter.begin_step();
        let _ = arbiter.resolve_and_apply::<SimpleBody>(DT, None);
    }
    assert!(!arbiter.is_override_active());
}

#[test]
fn test_override_ticks_once_per_step() {
    let mut arbiter = VelocityArbiter::new();
    let mut body = SimpleBody::new(1.0);
    arbiter.activate_override(0.04);

    arbiter.begin_step();
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    // A repeated resolve inside the same step must not eat into the window
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    let _ = arbiter.resolve_and_apply::<SimpleBody>(DT, None);

    let state = arbiter.override_state();
    assert!(state.active);
    assert!((state.remaining - 0.02).abs() < 1e-4);

    arbiter.begin_step();
    arbiter.resolve_and_apply(DT, Some(&mut body)).unwrap();
    assert!(!arbiter.is_override_active());
}

// -----------------------------------------------------------------------------
// Movement strategy tests
// -----------------------------------------------------------------------------

#[test]
fn test_cardinal_diagonal_is_not_faster() {
    let strategy = CardinalMovement {
        speed: 200.0,
        dash_speed: None,
    };
    let request = strategy.movement(&ctx(Vec2::new(1.0, 1.0), Vec2::ZERO, false));

    assert!((request.vector.length() - 200.0).abs() < 1e-3);
    assert_eq!(request.priority, MotionPriority::Normal);
    assert_eq!(request.kind, MotionKind::Movement);
}

#[test]
fn test_cardinal_idle_is_zero() {
    let strategy = CardinalMovement {
        speed: 200.0,
        dash_speed: Some(500.0),
    };
    let request = strategy.movement(&ctx(Vec2::ZERO, Vec2::ZERO, true));
    assert_eq!(request.vector, Vec2::ZERO);
}

#[test]
fn test_side_to_side_ignores_vertical_input() {
    let strategy = SideToSideMovement {
        speed: 320.0,
        dash_speed: Some(900.0),
    };

    let walk = strategy.movement(&ctx(Vec2::new(-1.0, 1.0), Vec2::ZERO, false));
    assert_eq!(walk.vector, Vec2::new(-320.0, 0.0));

    let dash = strategy.movement(&ctx(Vec2::new(1.0, 0.0), Vec2::ZERO, true));
    assert_eq!(dash.vector, Vec2::new(900.0, 0.0));
}

#[test]
fn test_momentum_accelerates_and_caps() {
    let strategy = MomentumMovement {
        acceleration: 1000.0,
        speed_cap: 250.0,
        dash_speed_cap: None,
    };

    let first = strategy.movement(&ctx(Vec2::X, Vec2::ZERO, false));
    assert_eq!(first.vector, Vec2::new(20.0, 0.0));

    let capped = strategy.movement(&ctx(Vec2::X, Vec2::new(245.0, 0.0), false));
    assert!((capped.vector.length() - 250.0).abs() < 1e-3);
}

#[test]
fn test_momentum_coasts_without_input() {
    let strategy = MomentumMovement {
        acceleration: 1000.0,
        speed_cap: 250.0,
        dash_speed_cap: Some(400.0),
    };
    let coast = strategy.movement(&ctx(Vec2::ZERO, Vec2::new(0.0, 120.0), false));
    assert_eq!(coast.vector, Vec2::new(0.0, 120.0));
}

#[test]
fn test_driver_uses_latest_input() {
    let mut driver = MovementDriver::new(Box::new(SideToSideMovement {
        speed: 100.0,
        dash_speed: None,
    }));
    assert_eq!(driver.strategy_name(), "side_to_side");

    driver.set_input(Vec2::new(1.0, 0.0), false);
    driver.set_input(Vec2::new(-1.0, 0.0), false);
    assert_eq!(driver.input(), Vec2::new(-1.0, 0.0));
    assert_eq!(driver.step(Vec2::ZERO, DT).vector, Vec2::new(-100.0, 0.0));
}

// -----------------------------------------------------------------------------
// Contact tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_contact_from_sides() {
    assert_eq!(WallContact::from_sides(false, false), WallContact::None);
    assert_eq!(WallContact::from_sides(true, false), WallContact::Left);
    assert_eq!(WallContact::from_sides(false, true), WallContact::Right);
    assert_eq!(WallContact::from_sides(true, true), WallContact::Both);
}

#[test]
fn test_contact_state_sensors() {
    let left = ContactState::on_wall(WallContact::Left);
    assert!(!left.is_grounded());
    assert!(left.is_wall_colliding(WallSide::Left));
    assert!(!left.is_wall_colliding(WallSide::Right));
    assert!(left.is_touching_wall());

    let both = ContactState::on_wall(WallContact::Both);
    assert!(both.is_wall_colliding(WallSide::Left));
    assert!(both.is_wall_colliding(WallSide::Right));

    assert!(ContactState::grounded().is_grounded());
    assert!(!ContactState::airborne().is_touching_wall());
}
