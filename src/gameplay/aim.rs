// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drag-to-launch math and the transient aim state.
//!
//! A drag runs from the aim origin (the resting ball, or the slingshot anchor)
//! to the pointer. Launch power is the drag length clamped to `max_power`;
//! the ball is sent the opposite way, like pulling back a cue or a sling.

use bevy::prelude::*;
use std::f32::consts::PI;

use crate::core::components::AimArrow;

/// Drag distance -> launch power. Linear, clamped to `[0, max_power]`.
#[inline]
pub fn launch_power(distance: f32, max_power: f32) -> f32 {
    if !distance.is_finite() {
        return 0.0;
    }
    distance.clamp(0.0, max_power.max(0.0))
}

/// Unit vector pointing from the pointer back through the origin. Zero when they coincide.
#[inline]
pub fn launch_direction(origin: Vec2, pointer: Vec2) -> Vec2 {
    (origin - pointer).normalize_or_zero()
}

/// Launch velocity (or impulse, depending on `per_power`) for a drag.
pub fn launch_vector(origin: Vec2, pointer: Vec2, max_power: f32, per_power: f32) -> Vec2 {
    let power = launch_power(origin.distance(pointer), max_power);
    launch_direction(origin, pointer) * power * per_power
}

/// Arrow rotation: the drag angle turned half a circle.
#[inline]
pub fn arrow_rotation(origin: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - origin;
    d.y.atan2(d.x) + PI
}

/// Arrow x-scale for a power, relative to the sprite's base length.
#[inline]
pub fn arrow_scale(power: f32, base_len: f32) -> f32 {
    if base_len <= 0.0 {
        return 0.0;
    }
    power / base_len
}

/// Green at zero power, red at full power, linear in between.
pub fn power_tint(power: f32, max_power: f32) -> Color {
    let t = if max_power > 0.0 {
        (power / max_power).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Color::srgb(t, 1.0 - t, 0.0)
}

/// Keep a pulled-back ball within `max_len` of the anchor.
pub fn constrain_to_anchor(anchor: Vec2, pointer: Vec2, max_len: f32) -> Vec2 {
    let offset = pointer - anchor;
    anchor + offset.clamp_length_max(max_len.max(0.0))
}

/// Snapshot handed out by [`AimState::release`]; consumed by exactly one launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimRelease {
    pub ball: Entity,
    pub origin: Vec2,
    pub pointer: Vec2,
    pub power: f32,
}

/// Transient state between pointer-down and pointer-up.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct AimState {
    ball: Option<Entity>,
    origin: Vec2,
    pointer: Vec2,
    power: f32,
}

impl AimState {
    pub fn is_aiming(&self) -> bool {
        self.ball.is_some()
    }

    pub fn ball(&self) -> Option<Entity> {
        self.ball
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    /// Start aiming `ball` from `origin`. Refused while another aim is live.
    pub fn begin(&mut self, ball: Entity, origin: Vec2) -> bool {
        if self.ball.is_some() {
            return false;
        }
        self.ball = Some(ball);
        self.origin = origin;
        self.pointer = origin;
        self.power = 0.0;
        true
    }

    /// Track the pointer; returns the current power (0 when not aiming).
    pub fn update(&mut self, pointer: Vec2, max_power: f32) -> f32 {
        if self.ball.is_none() {
            return 0.0;
        }
        self.pointer = pointer;
        self.power = launch_power(self.origin.distance(pointer), max_power);
        self.power
    }

    /// End the aim. State is reset before the snapshot is returned, so a
    /// second call yields `None`.
    pub fn release(&mut self) -> Option<AimRelease> {
        let ball = self.ball.take()?;
        let out = AimRelease {
            ball,
            origin: self.origin,
            pointer: self.pointer,
            power: self.power,
        };
        *self = Self::default();
        Some(out)
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Drops the current aim and hides its arrow.
pub fn cancel_aim(aim: &mut AimState, arrows: &mut Query<&mut Visibility, With<AimArrow>>) {
    aim.cancel();
    for mut vis in arrows.iter_mut() {
        *vis = Visibility::Hidden;
    }
}

impl AimRelease {
    pub fn direction(&self) -> Vec2 {
        launch_direction(self.origin, self.pointer)
    }

    pub fn vector(&self, per_power: f32) -> Vec2 {
        self.direction() * self.power * per_power
    }
}
