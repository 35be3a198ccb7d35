#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// F1 flips the collider wireframe overlay.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        state.wireframe = !state.wireframe;
        info!("WIREFRAME {} frame={}", if state.wireframe { "on" } else { "off" }, state.frame_counter);
    }
}

#[cfg(feature = "debug")]
pub fn sync_rapier_wireframe(
    state: Res<DebugState>,
    ctx: Option<ResMut<bevy_rapier2d::render::DebugRenderContext>>,
) {
    if let Some(mut c) = ctx {
        if c.enabled != state.wireframe {
            c.enabled = state.wireframe;
        }
    }
}
