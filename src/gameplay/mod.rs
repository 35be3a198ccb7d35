pub mod aim;
pub mod hud;
pub mod outcome;
pub mod round;
pub mod scene;
