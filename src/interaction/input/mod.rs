pub mod input_interaction;
pub mod scene_keys;

pub use input_interaction::{InputInteractionPlugin, PointerAction};
pub use scene_keys::SceneKeysPlugin;
