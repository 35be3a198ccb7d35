// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Placeholder art generated in memory so every variant runs without files.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::RgbaImage;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::raster::{fill_circle, fill_rect, fill_triangle, hex, shade_sphere};
use crate::rendering::palette::palette::{
    CRATE_BORDER, CRATE_FILL, GRASS, GROUND, HOLE_INNER, HOLE_RIM,
};

pub const BALL_TEX: u32 = 32;
pub const HOLE_TEX: u32 = 40;
pub const ARROW_TEX: (u32, u32) = (140, 30);
/// Shaft length in pixels; the arrow sprite scale is expressed relative to it.
pub const ARROW_SHAFT_LEN: u32 = 100;
pub const TILE_TEX: u32 = 64;
pub const CRATE_TEX: u32 = 32;
const GRASS_SEED: u64 = 0x6f6c_6667;

/// Every sprite role a scene can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtRole {
    Ball,
    Hole,
    Arrow,
    Grass,
    CrateBox,
    Ground,
}

impl ArtRole {
    pub const ALL: [ArtRole; 6] = [
        ArtRole::Ball,
        ArtRole::Hole,
        ArtRole::Arrow,
        ArtRole::Grass,
        ArtRole::CrateBox,
        ArtRole::Ground,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Hole => "hole",
            Self::Arrow => "arrow",
            Self::Grass => "grass",
            Self::CrateBox => "crate",
            Self::Ground => "ground",
        }
    }

    pub fn render(self) -> RgbaImage {
        match self {
            Self::Ball => ball_image(),
            Self::Hole => hole_image(),
            Self::Arrow => arrow_image(),
            Self::Grass => grass_image(),
            Self::CrateBox => crate_image(),
            Self::Ground => ground_image(),
        }
    }
}

/// White sphere with a specular highlight.
pub fn ball_image() -> RgbaImage {
    let mut img = RgbaImage::new(BALL_TEX, BALL_TEX);
    let r = BALL_TEX as f32 * 0.5;
    shade_sphere(&mut img, r, r, r, hex(0xffffff));
    img
}

/// Black cup with a slightly lighter inner shadow.
pub fn hole_image() -> RgbaImage {
    let mut img = RgbaImage::new(HOLE_TEX, HOLE_TEX);
    let c = HOLE_TEX as f32 * 0.5;
    fill_circle(&mut img, c, c, 20.0, HOLE_RIM);
    fill_circle(&mut img, c, c, 18.0, HOLE_INNER);
    img
}

/// White arrow pointing along +X, vertically centred. Tinted at runtime.
pub fn arrow_image() -> RgbaImage {
    let (w, h) = ARROW_TEX;
    let mut img = RgbaImage::new(w, h);
    let mid = h as i32 / 2;
    fill_rect(&mut img, 0, mid - 5, ARROW_SHAFT_LEN as i32, 10, hex(0xffffff));
    let shaft = ARROW_SHAFT_LEN as f32;
    fill_triangle(
        &mut img,
        (shaft, 0.0),
        (shaft, h as f32),
        (shaft + 30.0, h as f32 * 0.5),
        hex(0xffffff),
    );
    img
}

/// Dark green tile with a deterministic speckle.
pub fn grass_image() -> RgbaImage {
    let mut img = RgbaImage::new(TILE_TEX, TILE_TEX);
    fill_rect(&mut img, 0, 0, TILE_TEX as i32, TILE_TEX as i32, GRASS);
    let mut rng = StdRng::seed_from_u64(GRASS_SEED);
    for _ in 0..TILE_TEX * 3 {
        let x = rng.gen_range(0..TILE_TEX);
        let y = rng.gen_range(0..TILE_TEX);
        let lift: i16 = rng.gen_range(-14..=14);
        let p = img.get_pixel_mut(x, y);
        for ch in &mut p.0[..3] {
            *ch = (*ch as i16 + lift).clamp(0, 255) as u8;
        }
    }
    img
}

pub fn crate_image() -> RgbaImage {
    let s = CRATE_TEX as i32;
    let mut img = RgbaImage::new(CRATE_TEX, CRATE_TEX);
    fill_rect(&mut img, 0, 0, s, s, CRATE_BORDER);
    fill_rect(&mut img, 3, 3, s - 6, s - 6, CRATE_FILL);
    // cross brace
    for i in 3..s - 3 {
        fill_rect(&mut img, i - 1, i - 1, 3, 3, CRATE_BORDER);
        fill_rect(&mut img, s - i - 2, i - 1, 3, 3, CRATE_BORDER);
    }
    img
}

pub fn ground_image() -> RgbaImage {
    let s = TILE_TEX as i32;
    let mut img = RgbaImage::new(TILE_TEX, TILE_TEX);
    fill_rect(&mut img, 0, 0, s, s, GROUND);
    fill_rect(&mut img, 0, 0, s, 6, GRASS);
    img
}

/// Wrap an RGBA8 buffer as a Bevy texture.
pub fn to_bevy_image(img: RgbaImage) -> Image {
    let (width, height) = img.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        img.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
}

/// Handles of the in-memory textures, one per [`ArtRole`].
#[derive(Resource, Debug, Clone)]
pub struct GeneratedArt {
    pub ball: Handle<Image>,
    pub hole: Handle<Image>,
    pub arrow: Handle<Image>,
    pub grass: Handle<Image>,
    pub crate_box: Handle<Image>,
    pub ground: Handle<Image>,
}

impl GeneratedArt {
    pub fn build(images: &mut Assets<Image>) -> Self {
        let mut add = |role: ArtRole| images.add(to_bevy_image(role.render()));
        Self {
            ball: add(ArtRole::Ball),
            hole: add(ArtRole::Hole),
            arrow: add(ArtRole::Arrow),
            grass: add(ArtRole::Grass),
            crate_box: add(ArtRole::CrateBox),
            ground: add(ArtRole::Ground),
        }
    }

    pub fn get(&self, role: ArtRole) -> Handle<Image> {
        match role {
            ArtRole::Ball => self.ball.clone(),
            ArtRole::Hole => self.hole.clone(),
            ArtRole::Arrow => self.arrow.clone(),
            ArtRole::Grass => self.grass.clone(),
            ArtRole::CrateBox => self.crate_box.clone(),
            ArtRole::Ground => self.ground.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_is_round_and_opaque_in_the_middle() {
        let img = ball_image();
        assert_eq!(img.dimensions(), (32, 32));
        assert_eq!(img.get_pixel(16, 16).0[3], 255);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(31, 31).0[3], 0);
    }

    #[test]
    fn hole_has_rim_and_inner_shadow() {
        let img = hole_image();
        assert_eq!(img.get_pixel(20, 20).0, HOLE_INNER);
        assert_eq!(img.get_pixel(20, 1).0, HOLE_RIM);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn arrow_shaft_and_head() {
        let img = arrow_image();
        assert_eq!(img.dimensions(), ARROW_TEX);
        assert_eq!(img.get_pixel(50, 15).0[3], 255);
        assert_eq!(img.get_pixel(50, 2).0[3], 0);
        assert_eq!(img.get_pixel(105, 15).0[3], 255);
        assert_eq!(img.get_pixel(135, 15).0[3], 0);
    }

    #[test]
    fn grass_is_deterministic() {
        assert_eq!(grass_image(), grass_image());
    }

    #[test]
    fn bevy_image_keeps_size() {
        let img = to_bevy_image(crate_image());
        assert_eq!(img.size(), UVec2::new(CRATE_TEX, CRATE_TEX));
    }

    #[test]
    fn generated_art_registers_every_role() {
        let mut images = Assets::<Image>::default();
        let art = GeneratedArt::build(&mut images);
        for role in ArtRole::ALL {
            assert!(images.get(&art.get(role)).is_some(), "{role:?} missing");
        }
    }
}
