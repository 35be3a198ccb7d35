pub mod config;

pub use config::{
    AimConfig, DemolitionConfig, GameConfig, GolfConfig, MaterialConfig, SpritesConfig,
    WindowConfig,
};
