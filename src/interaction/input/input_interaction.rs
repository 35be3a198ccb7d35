// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{AimArrow, Ball, BallHome, BallRadius, Racked};
use crate::core::config::GameConfig;
use crate::core::level::{ActiveVariant, LaunchMode, SceneKind};
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::aim::{arrow_rotation, arrow_scale, constrain_to_anchor, power_tint, AimState};
use crate::gameplay::round::{RoundEvent, Scoreboard, Sinking};
use crate::physics::rapier::ball_mass;
use crate::rendering::camera::camera::MainCamera;

/// Below this power a release is treated as a click, not a shot.
const MIN_LAUNCH_POWER: f32 = 1.0;

pub struct InputInteractionPlugin;

impl Plugin for InputInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerAction>()
            .init_resource::<AimState>()
            .add_systems(
                Update,
                (
                    sample_pointer.run_if(resource_exists::<ButtonInput<MouseButton>>),
                    (on_pointer_down, on_pointer_move, on_pointer_up).chain(),
                )
                    .chain()
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Pointer input in world space: the mouse's left button or the first touch.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn primary_pointer_screen_pos(window: &Window, touches: &Touches) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return Some(touch.position());
    }
    if let Some(touch) = touches.iter_just_released().next() {
        return Some(touch.position());
    }
    window.cursor_position()
}

/// Turn raw mouse/touch state into down/move/up actions.
fn sample_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut last: Local<Option<Vec2>>,
    mut out: EventWriter<PointerAction>,
) {
    let Ok(window) = windows_q.single() else {
        return;
    };
    let world = primary_pointer_screen_pos(window, &touches)
        .and_then(|p| cursor_world_pos(&camera_q, p))
        .or(*last);
    let Some(pos) = world else {
        return;
    };
    if buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some() {
        out.write(PointerAction::Down(pos));
    } else if last.is_some_and(|l| l.distance_squared(pos) > f32::EPSILON) {
        out.write(PointerAction::Move(pos));
    }
    if buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some() {
        out.write(PointerAction::Up(pos));
    }
    *last = Some(pos);
}

fn on_pointer_down(
    mut actions: EventReader<PointerAction>,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    mut aim: ResMut<AimState>,
    q_ball: Query<
        (Entity, &Transform, &Velocity, &BallHome, Has<Racked>),
        (With<Ball>, Without<Sinking>),
    >,
    mut q_arrow: Query<(&mut Transform, &mut Visibility), (With<AimArrow>, Without<Ball>)>,
) {
    for action in actions.read() {
        let PointerAction::Down(_) = action else {
            continue;
        };
        if aim.is_aiming() {
            continue;
        }
        let Some((e, tf, vel, home, racked)) = q_ball.iter().next() else {
            continue;
        };
        let origin = match variant.kind() {
            // Only a ball that has (almost) stopped may be putted again.
            SceneKind::Golf if vel.linvel.length() < cfg.aim.aim_speed_gate => {
                tf.translation.truncate()
            }
            SceneKind::Demolition if racked => home.0,
            _ => continue,
        };
        if aim.begin(e, origin) {
            debug!(target: "aim", "aim started at {origin:?}");
            if let Ok((mut arrow_tf, mut vis)) = q_arrow.single_mut() {
                arrow_tf.translation = origin.extend(arrow_tf.translation.z);
                arrow_tf.scale = Vec3::new(0.0, 1.0, 1.0);
                *vis = Visibility::Visible;
            }
        }
    }
}

fn on_pointer_move(
    mut actions: EventReader<PointerAction>,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    mut aim: ResMut<AimState>,
    mut q_ball: Query<&mut Transform, (With<Ball>, With<Racked>)>,
    mut q_arrow: Query<(&mut Transform, &mut Sprite), (With<AimArrow>, Without<Ball>)>,
) {
    let Some(pos) = actions
        .read()
        .filter_map(|a| match a {
            PointerAction::Move(p) => Some(*p),
            _ => None,
        })
        .last()
    else {
        return;
    };
    let Some(ball) = aim.ball() else {
        return;
    };
    let power = aim.update(pos, cfg.aim.max_power);
    let origin = aim.origin();
    if variant.kind() == SceneKind::Demolition {
        if let Ok(mut tf) = q_ball.get_mut(ball) {
            let held = constrain_to_anchor(origin, pos, cfg.aim.max_power);
            tf.translation = held.extend(tf.translation.z);
        }
    }
    if let Ok((mut tf, mut sprite)) = q_arrow.single_mut() {
        tf.rotation = Quat::from_rotation_z(arrow_rotation(origin, pos));
        tf.scale = Vec3::new(arrow_scale(power, cfg.aim.arrow_base_len), 1.0, 1.0);
        sprite.color = power_tint(power, cfg.aim.max_power);
    }
}

#[allow(clippy::too_many_arguments)]
fn on_pointer_up(
    mut commands: Commands,
    mut actions: EventReader<PointerAction>,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    mut aim: ResMut<AimState>,
    mut score: ResMut<Scoreboard>,
    mut events: EventWriter<RoundEvent>,
    mut q_ball: Query<
        (
            &mut Transform,
            &mut Velocity,
            &mut ExternalImpulse,
            &BallHome,
            &BallRadius,
            Option<&ReadMassProperties>,
            Has<Racked>,
        ),
        With<Ball>,
    >,
    mut q_arrow: Query<&mut Visibility, With<AimArrow>>,
) {
    for action in actions.read() {
        let PointerAction::Up(pos) = *action else {
            continue;
        };
        aim.update(pos, cfg.aim.max_power);
        // Taking the release clears the aim before anything is applied.
        let Some(release) = aim.release() else {
            continue;
        };
        if let Ok(mut vis) = q_arrow.single_mut() {
            *vis = Visibility::Hidden;
        }
        let Ok((mut tf, mut vel, mut impulse, home, radius, read_mass, racked)) =
            q_ball.get_mut(release.ball)
        else {
            continue;
        };
        if release.power < MIN_LAUNCH_POWER {
            if racked {
                tf.translation = home.0.extend(tf.translation.z);
            }
            continue;
        }
        if racked {
            tf.translation = home.0.extend(tf.translation.z);
            commands
                .entity(release.ball)
                .remove::<Racked>()
                .insert(RigidBody::Dynamic);
        }
        match variant.launch() {
            LaunchMode::Velocity => {
                vel.linvel = release.vector(cfg.aim.velocity_per_power);
                vel.angvel = 0.0;
            }
            LaunchMode::Impulse => {
                // Rapier masses are density * px^2; use the collider mass until Rapier reports one.
                let material = match variant.kind() {
                    SceneKind::Golf => &cfg.golf.ball,
                    SceneKind::Demolition => &cfg.demolition.ball,
                };
                let mass = read_mass
                    .map(|m| m.get().mass)
                    .filter(|m| *m > 0.0)
                    .unwrap_or_else(|| ball_mass(radius.0, material));
                vel.linvel = Vec2::ZERO;
                impulse.impulse = release.vector(cfg.aim.impulse_per_power * mass);
            }
        }
        score.shots += 1;
        events.write(RoundEvent::Launched {
            power: release.power,
        });
        info!(
            target: "aim",
            "launch #{} power={:.0} dir={:?} mode={:?}",
            score.shots,
            release.power,
            release.direction(),
            variant.launch()
        );
    }
}
