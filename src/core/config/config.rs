// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 800.0,
            title: "Flingball".into(),
            auto_close: 0.0,
        }
    }
}

/// Surface material handed to Rapier for one body family.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
    /// Linear damping (air drag). 0 = none.
    pub linear_damping: f32,
}
impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            friction: 0.5,
            density: 1.0,
            linear_damping: 0.0,
        }
    }
}

/// Drag-to-launch tuning shared by every variant.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AimConfig {
    /// Drag distance (px) at which launch power saturates.
    pub max_power: f32,
    /// Launch speed (px/s) per unit of power for velocity launches.
    pub velocity_per_power: f32,
    /// Impulse launches: speed change (px/s) per unit of power. The applied
    /// impulse is this times the ball's mass.
    pub impulse_per_power: f32,
    /// Ball must be slower than this (px/s) before a new aim may start.
    pub aim_speed_gate: f32,
    /// Arrow sprite length (px) that corresponds to x-scale 1.0.
    pub arrow_base_len: f32,
}
impl Default for AimConfig {
    fn default() -> Self {
        Self {
            max_power: 200.0,
            velocity_per_power: 9.0,
            impulse_per_power: 9.0,
            aim_speed_gate: 12.0,
            arrow_base_len: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GolfConfig {
    pub wall_thickness: f32,
    pub wall: MaterialConfig,
    pub ball_radius: f32,
    pub ball: MaterialConfig,
    pub hole_radius: f32,
    /// Distance of the hole centre from the top edge.
    pub hole_from_top: f32,
    /// Distance of the ball spawn from the bottom edge.
    pub ball_from_bottom: f32,
    /// Ball must be slower than this (px/s) while over the hole to drop in.
    pub hole_speed: f32,
    pub sink_secs: f32,
    pub banner_secs: f32,
    pub fall_margin: f32,
}
impl Default for GolfConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 50.0,
            wall: MaterialConfig {
                restitution: 0.6,
                friction: 0.1,
                density: 1.0,
                linear_damping: 0.0,
            },
            ball_radius: 16.0,
            ball: MaterialConfig {
                restitution: 0.8,
                friction: 0.05,
                density: 1.0,
                linear_damping: 1.2,
            },
            hole_radius: 15.0,
            hole_from_top: 150.0,
            ball_from_bottom: 150.0,
            hole_speed: 150.0,
            sink_secs: 0.3,
            banner_secs: 2.5,
            fall_margin: 64.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemolitionConfig {
    pub gravity_y: f32,
    pub ground_height: f32,
    pub ground: MaterialConfig,
    /// Slingshot anchor, measured from the left edge.
    pub anchor_from_left: f32,
    /// Slingshot anchor height above the ground surface.
    pub anchor_height: f32,
    pub ball_radius: f32,
    pub ball: MaterialConfig,
    pub pyramid_rows: u32,
    pub box_size: f32,
    pub box_gap: f32,
    /// Pyramid centre, measured from the right edge.
    pub pyramid_from_right: f32,
    pub boxes: MaterialConfig,
    /// A launched ball slower than `settle_speed` for this long is re-racked.
    pub settle_secs: f32,
    pub settle_speed: f32,
    pub fall_margin: f32,
}
impl Default for DemolitionConfig {
    fn default() -> Self {
        Self {
            gravity_y: -980.0,
            ground_height: 40.0,
            ground: MaterialConfig {
                restitution: 0.1,
                friction: 0.8,
                density: 1.0,
                linear_damping: 0.0,
            },
            anchor_from_left: 90.0,
            anchor_height: 160.0,
            ball_radius: 16.0,
            ball: MaterialConfig {
                restitution: 0.4,
                friction: 0.5,
                density: 4.0,
                linear_damping: 0.05,
            },
            pyramid_rows: 5,
            box_size: 32.0,
            box_gap: 2.0,
            pyramid_from_right: 110.0,
            boxes: MaterialConfig {
                restitution: 0.1,
                friction: 0.6,
                density: 0.5,
                linear_damping: 0.0,
            },
            settle_secs: 1.5,
            settle_speed: 12.0,
            fall_margin: 64.0,
        }
    }
}

/// Image paths (relative to `assets/`) used by the sprite variants.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpritesConfig {
    pub ball: String,
    pub hole: String,
    pub arrow: String,
    pub grass: String,
    pub crate_box: String,
    pub ground: String,
}
impl Default for SpritesConfig {
    fn default() -> Self {
        Self {
            ball: "textures/ball.png".into(),
            hole: "textures/hole.png".into(),
            arrow: "textures/arrow.png".into(),
            grass: "textures/grass.png".into(),
            crate_box: "textures/crate.png".into(),
            ground: "textures/ground.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Variant started when none is given on the command line ("" = show menu).
    pub default_variant: String,
    pub aim: AimConfig,
    pub golf: GolfConfig,
    pub demolition: DemolitionConfig,
    pub sprites: SpritesConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            default_variant: String::new(),
            aim: Default::default(),
            golf: Default::default(),
            demolition: Default::default(),
            sprites: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge every readable file in order (later keys win) and deserialize the result.
    /// Returns the config, the files that contributed and any problems encountered.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                // Optional layers (e.g. game.local.ron) are allowed to be absent.
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let aim = &self.aim;
        if aim.max_power <= 0.0 {
            w.push("aim.max_power must be > 0; every launch will have zero power".into());
        }
        if aim.velocity_per_power <= 0.0 {
            w.push("aim.velocity_per_power must be > 0".into());
        }
        if aim.impulse_per_power <= 0.0 {
            w.push("aim.impulse_per_power must be > 0".into());
        }
        if aim.aim_speed_gate < 0.0 {
            w.push("aim.aim_speed_gate negative -> aiming can never start".into());
        }
        if aim.arrow_base_len <= 0.0 {
            w.push("aim.arrow_base_len must be > 0".into());
        }
        fn check_material(w: &mut Vec<String>, label: &str, m: &MaterialConfig) {
            if !(0.0..=1.5).contains(&m.restitution) {
                w.push(format!(
                    "{label}.restitution {} outside recommended 0..1.5",
                    m.restitution
                ));
            }
            if m.friction < 0.0 {
                w.push(format!("{label}.friction negative"));
            }
            if m.density <= 0.0 {
                w.push(format!("{label}.density must be > 0"));
            }
            if m.linear_damping < 0.0 {
                w.push(format!("{label}.linear_damping negative -> bodies accelerate"));
            }
        }
        let g = &self.golf;
        check_material(&mut w, "golf.wall", &g.wall);
        check_material(&mut w, "golf.ball", &g.ball);
        if g.ball_radius <= 0.0 {
            w.push("golf.ball_radius must be > 0".into());
        }
        if g.hole_radius <= 0.0 {
            w.push("golf.hole_radius must be > 0".into());
        }
        if g.hole_speed <= 0.0 {
            w.push("golf.hole_speed must be > 0; the ball can never drop".into());
        }
        if g.hole_from_top + g.ball_from_bottom >= self.window.height {
            w.push(format!(
                "golf hole ({} from top) and ball ({} from bottom) overlap in a {}px tall window",
                g.hole_from_top, g.ball_from_bottom, self.window.height
            ));
        }
        let d = &self.demolition;
        check_material(&mut w, "demolition.ground", &d.ground);
        check_material(&mut w, "demolition.ball", &d.ball);
        check_material(&mut w, "demolition.boxes", &d.boxes);
        if d.gravity_y > 0.0 {
            w.push(format!(
                "demolition.gravity_y is positive ({}); typical configs use negative for downward",
                d.gravity_y
            ));
        }
        if d.box_size <= 0.0 {
            w.push("demolition.box_size must be > 0".into());
        }
        if d.box_gap < 0.0 {
            w.push("demolition.box_gap negative -> boxes spawn interpenetrating".into());
        }
        if d.pyramid_rows == 0 {
            w.push("demolition.pyramid_rows is 0; nothing to knock over".into());
        }
        if d.pyramid_rows > 30 {
            w.push(format!(
                "demolition.pyramid_rows {} very high; performance may suffer",
                d.pyramid_rows
            ));
        }
        if d.ball_radius <= 0.0 {
            w.push("demolition.ball_radius must be > 0".into());
        }
        if d.settle_secs <= 0.0 {
            w.push("demolition.settle_secs must be > 0".into());
        }
        if !self.default_variant.is_empty()
            && crate::core::level::variant::VariantId::from_id(&self.default_variant).is_none()
        {
            w.push(format!(
                "default_variant '{}' unknown; the menu will be shown",
                self.default_variant
            ));
        }
        w
    }
}
