use bevy::prelude::*;

/// Marker component identifying the player ball (holds physics body & collider).
#[derive(Component, Debug)]
pub struct Ball;

/// Logical radius used both for the collider and sprite sizing.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Where the ball is put back on a reset (spawn point or slingshot anchor).
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq)]
pub struct BallHome(pub Vec2);

/// Demolition ball waiting in the slingshot; removed on first launch.
#[derive(Component, Debug, Copy, Clone)]
pub struct Racked;

/// Golf hole overlap sensor.
#[derive(Component, Debug)]
pub struct HoleSensor;

/// Static wall / ground slab.
#[derive(Component, Debug)]
pub struct Wall;

/// Dynamic box in a demolition pyramid, remembering where it was stacked.
#[derive(Component, Debug, Copy, Clone)]
pub struct CrateBox {
    pub home: Vec2,
}

/// Aim direction arrow (hidden unless aiming).
#[derive(Component, Debug)]
pub struct AimArrow;

/// Everything spawned for the current scene; despawned on restart / exit.
#[derive(Component, Debug, Default)]
pub struct SceneEntity;
