use bevy::prelude::*;

/// High-level app lifecycle state.
/// MainMenu -> Loading -> Playing, with Playing -> Loading for restarts.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Player chooses a variant.
    #[default]
    MainMenu,
    /// Transitional state while the scene for `ActiveVariant` is (re)built.
    Loading,
    /// Active gameplay.
    Playing,
}
