use bevy::prelude::*;

use crate::rendering::textures::raster::{hex, Rgba8};

// Texture colours (RGBA8) used by the procedural art.
pub const GRASS: Rgba8 = hex(0x2d5a27);
pub const HOLE_RIM: Rgba8 = hex(0x000000);
pub const HOLE_INNER: Rgba8 = hex(0x1a1a1a);
pub const CRATE_FILL: Rgba8 = hex(0xb07a3c);
pub const CRATE_BORDER: Rgba8 = hex(0x6b4420);
pub const GROUND: Rgba8 = hex(0x5b3a1e);

// Scene colours.
pub const GOLF_CLEAR: Color = Color::srgb(0.176, 0.176, 0.176); // #2d2d2d
pub const DEMOLITION_CLEAR: Color = Color::srgb(0.53, 0.78, 0.94);
pub const WALL_WOOD: Color = Color::srgb(0.55, 0.36, 0.19);
pub const SLING_POST: Color = Color::srgb(0.42, 0.26, 0.12);
pub const BANNER_BG: Color = Color::srgba(0.02, 0.02, 0.05, 0.85);
pub const HUD_TEXT: Color = Color::srgb(0.95, 0.95, 0.95);
pub const MENU_BG: Color = Color::srgba(0.02, 0.02, 0.05, 0.85);
