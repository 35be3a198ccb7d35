//! Per-frame termination rules.

use bevy::prelude::*;

use crate::core::level::Arena;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    /// Ball over the hole and slow enough to drop.
    Holed,
    /// Ball left the screen.
    FellOut,
}

/// Thresholds the poll runs against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeRules {
    pub hole_speed: f32,
    pub fall_margin: f32,
}

/// Leaving the arena wins over being in the hole.
pub fn classify(
    arena: &Arena,
    rules: &OutcomeRules,
    ball_pos: Vec2,
    speed: f32,
    over_hole: bool,
) -> Outcome {
    if arena.is_outside(ball_pos, rules.fall_margin) {
        Outcome::FellOut
    } else if over_hole && speed < rules.hole_speed {
        Outcome::Holed
    } else {
        Outcome::Playing
    }
}

/// A box counts as knocked down once it has tipped past 45 degrees or been
/// shoved more than half its size from its stacking slot.
pub fn is_toppled(home: Vec2, pos: Vec2, angle: f32, box_size: f32) -> bool {
    use std::f32::consts::{FRAC_PI_4, PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    wrapped.abs() > FRAC_PI_4 || home.distance(pos) > box_size * 0.5
}
