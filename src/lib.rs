pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::{ConfigDiagnostics, GamePlugin};
pub use crate::app::state::AppState;
pub use crate::core::components::{Ball, BallRadius, CrateBox, Racked};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::core::level::{ActiveVariant, VariantId};
