//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (pointer aiming and launches edit velocities before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (termination polling, tweens, ball re-racking)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input-driven velocity edits before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // outcome checks after physics
