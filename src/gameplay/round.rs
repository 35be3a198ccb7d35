// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Termination polling and its reactions: the golf ball dropping into the
//! cup, a ball leaving the screen, and re-racking a spent slingshot ball.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{AimArrow, Ball, BallHome, HoleSensor, Racked, SceneEntity};
use crate::core::config::GameConfig;
use crate::core::level::{ActiveVariant, Arena, SceneKind};
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::aim::{cancel_aim, AimState};
use crate::gameplay::outcome::{classify, Outcome, OutcomeRules};
use crate::rendering::palette::palette::{BANNER_BG, HUD_TEXT};

pub const WIN_MESSAGE: &str = "Hole in one! Level complete";

/// Whether the ball currently overlaps the hole sensor.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoleContact(pub bool);

/// Counters shown on the HUD; reset when a variant is picked from the menu.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub shots: u32,
    pub holes: u32,
    pub restarts: u32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    Launched { power: f32 },
    Holed,
    FellOut,
    Reracked,
}

/// Ball is shrinking into the cup.
#[derive(Component, Debug)]
pub struct Sinking {
    pub timer: Timer,
}

/// Seconds a launched demolition ball has been below the settle speed.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Resting(pub f32);

#[derive(Component, Debug)]
pub struct WinBanner {
    pub timer: Timer,
}

pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        // Collision events normally come from Rapier; register so headless tests can send them.
        app.add_event::<CollisionEvent>()
            .add_event::<RoundEvent>()
            .init_resource::<HoleContact>()
            .init_resource::<Scoreboard>()
            .add_systems(OnEnter(AppState::Loading), reset_hole_contact)
            .add_systems(OnEnter(AppState::MainMenu), reset_scoreboard)
            .add_systems(
                Update,
                (
                    track_hole_contact,
                    poll_outcome,
                    animate_sink,
                    settle_launched_ball,
                )
                    .chain()
                    .in_set(PostPhysicsAdjustSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, tick_banner.run_if(in_state(AppState::Playing)));
    }
}

fn reset_hole_contact(mut contact: ResMut<HoleContact>) {
    contact.0 = false;
}

fn reset_scoreboard(mut score: ResMut<Scoreboard>) {
    *score = Scoreboard::default();
}

fn track_hole_contact(
    mut events: EventReader<CollisionEvent>,
    q_ball: Query<(), With<Ball>>,
    q_hole: Query<(), With<HoleSensor>>,
    mut contact: ResMut<HoleContact>,
) {
    for ev in events.read() {
        let (a, b, started) = match ev {
            CollisionEvent::Started(a, b, _) => (*a, *b, true),
            CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
        };
        let pair = (q_ball.contains(a) && q_hole.contains(b))
            || (q_ball.contains(b) && q_hole.contains(a));
        if pair {
            contact.0 = started;
        }
    }
}

pub fn outcome_rules(kind: SceneKind, cfg: &GameConfig) -> OutcomeRules {
    match kind {
        SceneKind::Golf => OutcomeRules {
            hole_speed: cfg.golf.hole_speed,
            fall_margin: cfg.golf.fall_margin,
        },
        // No cup on the demolition range.
        SceneKind::Demolition => OutcomeRules {
            hole_speed: 0.0,
            fall_margin: cfg.demolition.fall_margin,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn poll_outcome(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    arena: Option<Res<Arena>>,
    contact: Res<HoleContact>,
    mut aim: ResMut<AimState>,
    mut score: ResMut<Scoreboard>,
    mut next: ResMut<NextState<AppState>>,
    mut events: EventWriter<RoundEvent>,
    mut q: Query<(Entity, &Transform, &mut Velocity), (With<Ball>, Without<Sinking>)>,
    mut q_arrow: Query<&mut Visibility, With<AimArrow>>,
) {
    let Some(arena) = arena else {
        return;
    };
    let rules = outcome_rules(variant.kind(), &cfg);
    for (e, tf, mut vel) in &mut q {
        let speed = vel.linvel.length();
        match classify(&arena, &rules, tf.translation.truncate(), speed, contact.0) {
            Outcome::Playing => {}
            Outcome::Holed => {
                info!(target: "round", "ball dropped at {speed:.1} px/s");
                if aim.ball() == Some(e) {
                    cancel_aim(&mut aim, &mut q_arrow);
                }
                vel.linvel = Vec2::ZERO;
                vel.angvel = 0.0;
                commands.entity(e).insert(Sinking {
                    timer: Timer::from_seconds(cfg.golf.sink_secs.max(0.01), TimerMode::Once),
                });
                events.write(RoundEvent::Holed);
            }
            Outcome::FellOut => {
                info!(
                    target: "round",
                    "ball left the screen at {:?}; restarting '{}'",
                    tf.translation.truncate(),
                    variant.id()
                );
                score.restarts += 1;
                events.write(RoundEvent::FellOut);
                next.set(AppState::Loading);
                return;
            }
        }
    }
}

fn animate_sink(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut contact: ResMut<HoleContact>,
    mut score: ResMut<Scoreboard>,
    mut q: Query<(Entity, &mut Sinking, &mut Transform, &mut Velocity, &BallHome), With<Ball>>,
) {
    for (e, mut sink, mut tf, mut vel, home) in &mut q {
        sink.timer.tick(time.delta());
        vel.linvel = Vec2::ZERO;
        vel.angvel = 0.0;
        let scale = 1.0 - sink.timer.fraction();
        tf.scale = Vec3::splat(scale.max(0.0));
        if !sink.timer.finished() {
            continue;
        }
        tf.translation = home.0.extend(tf.translation.z);
        tf.scale = Vec3::ONE;
        commands.entity(e).remove::<Sinking>();
        contact.0 = false;
        score.holes += 1;
        info!(target: "round", "{WIN_MESSAGE} (holes={})", score.holes);
        spawn_banner(&mut commands, cfg.golf.banner_secs);
    }
}

fn spawn_banner(commands: &mut Commands, secs: f32) {
    commands
        .spawn((
            SceneEntity,
            WinBanner {
                timer: Timer::from_seconds(secs.max(0.1), TimerMode::Once),
            },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Percent(40.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                Node {
                    padding: UiRect::all(Val::Px(16.0)),
                    ..default()
                },
                BackgroundColor(BANNER_BG),
            ))
            .with_children(|p| {
                p.spawn((
                    Text::new(WIN_MESSAGE),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(HUD_TEXT),
                ));
            });
        });
}

fn tick_banner(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut WinBanner)>,
) {
    for (e, mut banner) in &mut q {
        if banner.timer.tick(time.delta()).finished() {
            commands.entity(e).despawn();
        }
    }
}

/// Demolition only: a launched ball that has come to rest goes back in the sling.
fn settle_launched_ball(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    mut events: EventWriter<RoundEvent>,
    mut q: Query<
        (Entity, &mut Transform, &mut Velocity, &BallHome, Option<&mut Resting>),
        (With<Ball>, Without<Racked>, Without<Sinking>),
    >,
) {
    if variant.kind() != SceneKind::Demolition {
        return;
    }
    let d = &cfg.demolition;
    for (e, mut tf, mut vel, home, resting) in &mut q {
        let slow = vel.linvel.length() < d.settle_speed;
        let Some(mut resting) = resting else {
            commands.entity(e).insert(Resting::default());
            continue;
        };
        if !slow {
            resting.0 = 0.0;
            continue;
        }
        resting.0 += time.delta_secs();
        if resting.0 < d.settle_secs {
            continue;
        }
        tf.translation = home.0.extend(tf.translation.z);
        tf.rotation = Quat::IDENTITY;
        vel.linvel = Vec2::ZERO;
        vel.angvel = 0.0;
        commands
            .entity(e)
            .remove::<Resting>()
            .insert((Racked, RigidBody::Fixed));
        events.write(RoundEvent::Reracked);
        debug!(target: "round", "ball settled; re-racked at {:?}", home.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::VariantId;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use std::time::Duration;

    fn app_with(variant: VariantId) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(GameConfig::default())
            .insert_resource(ActiveVariant(variant))
            .insert_resource(Arena::new(400.0, 800.0))
            .init_resource::<AimState>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_state(AppState::Playing)
            .add_plugins(RoundPlugin);
        app
    }

    fn spawn_ball(app: &mut App, at: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Ball,
                BallHome(Vec2::new(0.0, -250.0)),
                Transform::from_translation(at.extend(3.0)),
                Velocity::zero(),
            ))
            .id()
    }

    /// One frame of 100 ms.
    fn step(app: &mut App) {
        app.update();
    }

    #[test]
    fn slow_ball_over_hole_sinks_and_resets() {
        let mut app = app_with(VariantId::Golf);
        let hole = app.world_mut().spawn(HoleSensor).id();
        let ball = spawn_ball(&mut app, Vec2::new(0.0, 250.0));
        app.world_mut().send_event(CollisionEvent::Started(
            ball,
            hole,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(app.world().get::<Sinking>(ball).is_some());

        for _ in 0..10 {
            step(&mut app);
        }
        assert!(app.world().get::<Sinking>(ball).is_none());
        let tf = app.world().get::<Transform>(ball).unwrap();
        assert_eq!(tf.translation.truncate(), Vec2::new(0.0, -250.0));
        assert_eq!(tf.scale, Vec3::ONE);
        assert_eq!(app.world().resource::<Scoreboard>().holes, 1);
        let banners = app
            .world_mut()
            .query::<&WinBanner>()
            .iter(app.world())
            .count();
        assert_eq!(banners, 1);
    }

    #[test]
    fn ball_holed_mid_aim_cancels_aim_and_hides_arrow() {
        let mut app = app_with(VariantId::Golf);
        let hole = app.world_mut().spawn(HoleSensor).id();
        let ball = spawn_ball(&mut app, Vec2::new(0.0, 250.0));
        let arrow = app.world_mut().spawn((AimArrow, Visibility::Visible)).id();
        app.world_mut()
            .resource_mut::<AimState>()
            .begin(ball, Vec2::new(0.0, 250.0));
        app.world_mut().send_event(CollisionEvent::Started(
            ball,
            hole,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(app.world().get::<Sinking>(ball).is_some());
        assert!(!app.world().resource::<AimState>().is_aiming());
        assert_eq!(
            app.world().get::<Visibility>(arrow),
            Some(&Visibility::Hidden)
        );
    }

    #[test]
    fn fast_ball_rolls_over_the_hole() {
        let mut app = app_with(VariantId::Golf);
        let hole = app.world_mut().spawn(HoleSensor).id();
        let ball = spawn_ball(&mut app, Vec2::new(0.0, 250.0));
        app.world_mut().get_mut::<Velocity>(ball).unwrap().linvel = Vec2::new(0.0, 400.0);
        app.world_mut().send_event(CollisionEvent::Started(
            hole,
            ball,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(app.world().get::<Sinking>(ball).is_none());
        assert!(app.world().resource::<HoleContact>().0);
        app.world_mut().send_event(CollisionEvent::Stopped(
            hole,
            ball,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(!app.world().resource::<HoleContact>().0);
    }

    #[test]
    fn ball_off_screen_requests_restart() {
        let mut app = app_with(VariantId::Demolition);
        spawn_ball(&mut app, Vec2::new(0.0, -1000.0));
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Loading
        );
        assert_eq!(app.world().resource::<Scoreboard>().restarts, 1);
    }

    #[test]
    fn resting_demolition_ball_is_reracked() {
        let mut app = app_with(VariantId::Demolition);
        let ball = spawn_ball(&mut app, Vec2::new(100.0, -300.0));
        for _ in 0..25 {
            step(&mut app);
        }
        assert!(app.world().get::<Racked>(ball).is_some());
        assert_eq!(
            app.world().get::<Transform>(ball).unwrap().translation.truncate(),
            Vec2::new(0.0, -250.0)
        );
    }
}
