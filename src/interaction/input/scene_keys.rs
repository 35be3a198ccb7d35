use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::AimArrow;
use crate::gameplay::aim::{cancel_aim, AimState};
use crate::gameplay::round::Scoreboard;

/// `R` rebuilds the current scene, `Esc` goes back to the variant menu.
pub struct SceneKeysPlugin;

impl Plugin for SceneKeysPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            scene_keys
                .run_if(in_state(AppState::Playing))
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        );
    }
}

fn scene_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut aim: ResMut<AimState>,
    mut score: ResMut<Scoreboard>,
    mut next: ResMut<NextState<AppState>>,
    mut q_arrow: Query<&mut Visibility, With<AimArrow>>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        cancel_aim(&mut aim, &mut q_arrow);
        score.restarts += 1;
        info!(target: "round", "manual restart #{}", score.restarts);
        next.set(AppState::Loading);
    } else if keys.just_pressed(KeyCode::Escape) {
        cancel_aim(&mut aim, &mut q_arrow);
        next.set(AppState::MainMenu);
    }
}
