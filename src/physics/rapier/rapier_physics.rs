// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::config::{GameConfig, MaterialConfig};
use crate::core::level::{ActiveVariant, SceneKind};

pub const PIXELS_PER_METER: f32 = 100.0;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier per scene

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            PIXELS_PER_METER,
        ))
        .add_systems(OnEnter(AppState::Playing), configure_gravity);
    }
}

/// Gravity (px/s^2) a scene of `kind` runs with: none on the putting green.
pub fn scene_gravity(kind: SceneKind, cfg: &GameConfig) -> Vec2 {
    match kind {
        SceneKind::Golf => Vec2::ZERO,
        SceneKind::Demolition => Vec2::new(0.0, cfg.demolition.gravity_y),
    }
}

fn configure_gravity(
    mut q_cfg: Query<&mut RapierConfiguration>,
    variant: Res<ActiveVariant>,
    game_cfg: Res<GameConfig>,
) {
    // RapierConfiguration lives on the default context entity, not in a resource.
    let Ok(mut cfg) = q_cfg.single_mut() else {
        warn!(target: "scene", "no Rapier context; gravity left unchanged");
        return;
    };
    let gravity = scene_gravity(variant.kind(), &game_cfg);
    cfg.gravity = Vect::new(gravity.x, gravity.y);
    debug!(target: "scene", "gravity set to {gravity:?} for {}", variant.id());
}

/// Material components for a body. Restitution combines with `Max` so a
/// bouncy ball stays bouncy against dull walls.
pub fn body_material(m: &MaterialConfig) -> (Restitution, Friction, ColliderMassProperties, Damping) {
    (
        Restitution {
            coefficient: m.restitution.max(0.0),
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction::coefficient(m.friction.max(0.0)),
        ColliderMassProperties::Density(m.density.max(1e-4)),
        Damping {
            linear_damping: m.linear_damping.max(0.0),
            angular_damping: 0.0,
        },
    )
}

/// Mass Rapier gives a ball collider of `radius` px under `m`. Lengths are
/// not rescaled by `PIXELS_PER_METER`, so this is density times px².
pub fn ball_mass(radius: f32, m: &MaterialConfig) -> f32 {
    std::f32::consts::PI * radius * radius * m.density.max(1e-4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golf_has_no_gravity() {
        let cfg = GameConfig::default();
        assert_eq!(scene_gravity(SceneKind::Golf, &cfg), Vec2::ZERO);
        assert!(scene_gravity(SceneKind::Demolition, &cfg).y < 0.0);
    }

    #[test]
    fn material_clamps_negatives() {
        let m = MaterialConfig {
            restitution: -1.0,
            friction: -0.5,
            density: 0.0,
            linear_damping: -2.0,
        };
        let (r, f, mass, d) = body_material(&m);
        assert_eq!(r.coefficient, 0.0);
        assert_eq!(f.coefficient, 0.0);
        assert!(matches!(mass, ColliderMassProperties::Density(x) if x > 0.0));
        assert_eq!(d.linear_damping, 0.0);
    }

    #[test]
    fn ball_mass_is_in_pixel_units() {
        let cfg = GameConfig::default();
        let m = ball_mass(16.0, &cfg.demolition.ball);
        let expected = std::f32::consts::PI * 256.0 * cfg.demolition.ball.density;
        assert!((m - expected).abs() < 1e-2);
        assert!(m > 1000.0);
    }
}
