pub mod camera;
pub mod palette;
pub mod textures;
