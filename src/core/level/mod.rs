pub mod layout;
pub mod variant;

pub use layout::Arena;
pub use variant::{ActiveVariant, ArtSource, LaunchMode, SceneKind, VariantId};
