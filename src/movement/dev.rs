//! Movement domain: debug-only test room and cutscene toggle.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::GameLayer;

#[derive(Clone, Copy)]
enum Surface {
    Floor,
    Platform,
    Wall,
}

/// (surface, center, size)
const TEST_ROOM: [(Surface, Vec2, Vec2); 7] = [
    (Surface::Floor, Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0)),
    (Surface::Wall, Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0)),
    (Surface::Wall, Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0)),
    (Surface::Platform, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0)),
    (Surface::Platform, Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0)),
    (Surface::Platform, Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0)),
    // Pillar for wall jump practice
    (Surface::Wall, Vec2::new(-100.0, -80.0), Vec2::new(30.0, 200.0)),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for (surface, center, size) in TEST_ROOM {
        let color = match surface {
            Surface::Floor => Color::srgb(0.4, 0.5, 0.4),
            Surface::Platform => Color::srgb(0.5, 0.4, 0.3),
            Surface::Wall => Color::srgb(0.3, 0.3, 0.4),
        };

        let layer = match surface {
            Surface::Floor | Surface::Platform => GameLayer::Ground,
            Surface::Wall => GameLayer::Wall,
        };

        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(layer, [GameLayer::Player]),
        ));
    }

    debug!("Spawned test room with {} surfaces", TEST_ROOM.len());
}

/// F2 flips between normal play and a cutscene, which freezes jumping.
pub(crate) fn toggle_cutscene(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    let next = match state.get() {
        GameState::Playing => GameState::Cutscene,
        GameState::Cutscene => GameState::Playing,
    };
    info!("Dev toggle: {:?} -> {:?}", state.get(), next);
    next_state.set(next);
}
