//! Debug module: feature gated collider wireframes and periodic stats logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod state;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use state::{DebugState, DebugStats};

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DebugPreRenderSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::{debug_key_input_system, sync_rapier_wireframe};
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        let wireframe = app
            .world()
            .get_resource::<crate::core::config::GameConfig>()
            .is_some_and(|c| c.rapier_debug);
        app.insert_resource(DebugState {
            wireframe,
            ..default()
        })
        .init_resource::<DebugStats>()
        .add_event::<crate::gameplay::round::RoundEvent>()
        .configure_sets(Update, DebugPreRenderSet.after(PostPhysicsAdjustSet))
        .add_systems(
            Update,
            (
                debug_key_input_system,
                sync_rapier_wireframe,
                debug_stats_collect_system,
                debug_logging_system,
            )
                .chain()
                .in_set(DebugPreRenderSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
