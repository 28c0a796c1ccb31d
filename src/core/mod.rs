//! Core domain: camera, game state, and control gating.

mod resources;
mod state;

pub use resources::JumpFreeze;
pub use state::GameState;

use bevy::prelude::*;

const CUTSCENE_FREEZE: &str = "cutscene";

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<JumpFreeze>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Cutscene), freeze_jumps_for_cutscene)
            .add_systems(OnExit(GameState::Cutscene), unfreeze_jumps_after_cutscene);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn freeze_jumps_for_cutscene(mut freeze: ResMut<JumpFreeze>) {
    freeze.freeze(CUTSCENE_FREEZE);
    info!("Cutscene started, jumping frozen");
}

fn unfreeze_jumps_after_cutscene(mut freeze: ResMut<JumpFreeze>) {
    freeze.unfreeze(CUTSCENE_FREEZE);
    info!("Cutscene ended, jumping restored");
}
