// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Closed-form scene geometry. World space is Bevy's: origin at the window
//! centre, +Y up, one unit per logical pixel.

use bevy::prelude::*;

use crate::core::config::{DemolitionConfig, GolfConfig};

/// Playfield extents (the window size at scene start).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub size: Vec2,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width.max(1.0), height.max(1.0)),
        }
    }

    pub fn half(&self) -> Vec2 {
        self.size * 0.5
    }

    /// True when `p` lies outside the arena grown by `margin` on every side.
    pub fn is_outside(&self, p: Vec2, margin: f32) -> bool {
        let h = self.half() + Vec2::splat(margin.max(0.0));
        p.x < -h.x || p.x > h.x || p.y < -h.y || p.y > h.y
    }
}

/// Axis-aligned static slab (wall / ground).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub center: Vec2,
    pub size: Vec2,
}

/// North, south, west and east walls centred on the arena edges.
pub fn golf_walls(arena: &Arena, thickness: f32) -> [Slab; 4] {
    let h = arena.half();
    let t = thickness.max(1.0);
    [
        Slab { center: Vec2::new(0.0, h.y), size: Vec2::new(arena.size.x, t) },
        Slab { center: Vec2::new(0.0, -h.y), size: Vec2::new(arena.size.x, t) },
        Slab { center: Vec2::new(-h.x, 0.0), size: Vec2::new(t, arena.size.y) },
        Slab { center: Vec2::new(h.x, 0.0), size: Vec2::new(t, arena.size.y) },
    ]
}

pub fn golf_hole_center(arena: &Arena, cfg: &GolfConfig) -> Vec2 {
    Vec2::new(0.0, arena.half().y - cfg.hole_from_top)
}

pub fn golf_ball_spawn(arena: &Arena, cfg: &GolfConfig) -> Vec2 {
    Vec2::new(0.0, -arena.half().y + cfg.ball_from_bottom)
}

/// Ground slab spanning the full width, flush with the bottom edge.
pub fn demolition_ground(arena: &Arena, cfg: &DemolitionConfig) -> Slab {
    let height = cfg.ground_height.max(1.0);
    Slab {
        center: Vec2::new(0.0, -arena.half().y + height * 0.5),
        size: Vec2::new(arena.size.x, height),
    }
}

/// Y of the ground's top surface.
pub fn demolition_ground_top(arena: &Arena, cfg: &DemolitionConfig) -> f32 {
    -arena.half().y + cfg.ground_height.max(1.0)
}

pub fn demolition_anchor(arena: &Arena, cfg: &DemolitionConfig) -> Vec2 {
    Vec2::new(
        -arena.half().x + cfg.anchor_from_left,
        demolition_ground_top(arena, cfg) + cfg.anchor_height,
    )
}

/// One box slot of a pyramid stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidSlot {
    pub row: u32,
    pub col: u32,
    pub center: Vec2,
}

/// Box centres for a pyramid of `rows` rows resting on `ground_y`, centred on `base_x`.
///
/// Row 0 is the bottom row and holds `rows` boxes; every row above holds one
/// fewer, offset by half a pitch so each box straddles the two below it.
pub fn pyramid_slots(rows: u32, box_size: f32, gap: f32, base_x: f32, ground_y: f32) -> Vec<PyramidSlot> {
    let pitch = box_size + gap.max(0.0);
    // Capacity is only a hint; absurd row counts must not pre-allocate.
    let mut out = Vec::with_capacity(pyramid_box_count(rows).min(4096) as usize);
    for row in 0..rows {
        let n = rows - row;
        let first = -((n as f32) - 1.0) * 0.5;
        let y = ground_y + box_size * 0.5 + row as f32 * box_size;
        for col in 0..n {
            out.push(PyramidSlot {
                row,
                col,
                center: Vec2::new(base_x + (first + col as f32) * pitch, y),
            });
        }
    }
    out
}

/// Boxes in a pyramid with `rows` rows. Widened so any `u32` row count fits.
pub fn pyramid_box_count(rows: u32) -> u64 {
    let rows = u64::from(rows);
    rows * (rows + 1) / 2
}

pub fn demolition_pyramid(arena: &Arena, cfg: &DemolitionConfig) -> Vec<PyramidSlot> {
    pyramid_slots(
        cfg.pyramid_rows,
        cfg.box_size,
        cfg.box_gap,
        arena.half().x - cfg.pyramid_from_right,
        demolition_ground_top(arena, cfg),
    )
}
