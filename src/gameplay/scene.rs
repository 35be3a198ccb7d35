// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scene construction and teardown. Every entity spawned here carries
//! [`SceneEntity`] so a restart can wipe the slate with one query.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy::sprite::{Anchor, SpriteImageMode};
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{
    AimArrow, Ball, BallHome, BallRadius, CrateBox, HoleSensor, Racked, SceneEntity, Wall,
};
use crate::core::config::{GameConfig, MaterialConfig, SpritesConfig};
use crate::core::level::layout::{
    demolition_anchor, demolition_ground, demolition_ground_top, demolition_pyramid, golf_ball_spawn,
    golf_hole_center, golf_walls, Slab,
};
use crate::core::level::{ActiveVariant, Arena, ArtSource, SceneKind};
use crate::gameplay::aim::{cancel_aim, AimState};
use crate::physics::rapier::body_material;
use crate::rendering::palette::palette::{DEMOLITION_CLEAR, GOLF_CLEAR, SLING_POST, WALL_WOOD};
use crate::rendering::textures::procedural::{ARROW_TEX, HOLE_TEX};
use crate::rendering::textures::{art_handle, ArtRole, ArtSlot, GeneratedArt};

const Z_BACKGROUND: f32 = 0.0;
const Z_STATIC: f32 = 0.5;
const Z_HOLE: f32 = 1.0;
const Z_BOXES: f32 = 2.0;
const Z_BALL: f32 = 3.0;
const Z_ARROW: f32 = 4.0;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AimState>()
            .add_systems(
                OnEnter(AppState::Loading),
                (spawn_scene, finish_loading).chain(),
            )
            .add_systems(OnExit(AppState::Playing), despawn_scene);
    }
}

/// Art lookup for the variant being built.
struct ArtCtx<'a> {
    source: ArtSource,
    generated: &'a GeneratedArt,
    sprites: &'a SpritesConfig,
    server: Option<&'a AssetServer>,
}

impl ArtCtx<'_> {
    fn image(&self, role: ArtRole) -> Handle<Image> {
        art_handle(role, self.source, self.generated, self.sprites, self.server)
    }

    fn sprite(&self, role: ArtRole, size: Vec2) -> (Sprite, ArtSlot) {
        (
            Sprite {
                image: self.image(role),
                custom_size: Some(size),
                ..default()
            },
            ArtSlot(role),
        )
    }

    fn tiled(&self, role: ArtRole, size: Vec2) -> (Sprite, ArtSlot) {
        (
            Sprite {
                image: self.image(role),
                custom_size: Some(size),
                image_mode: SpriteImageMode::Tiled {
                    tile_x: true,
                    tile_y: true,
                    stretch_value: 1.0,
                },
                ..default()
            },
            ArtSlot(role),
        )
    }
}

#[allow(clippy::too_many_arguments)]
pub fn spawn_scene(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    variant: Res<ActiveVariant>,
    generated: Res<GeneratedArt>,
    asset_server: Option<Res<AssetServer>>,
    windows: Query<&Window>,
    mut aim: ResMut<AimState>,
    mut q_arrow: Query<&mut Visibility, With<AimArrow>>,
) {
    let arena = match windows.single() {
        Ok(w) => Arena::new(w.width(), w.height()),
        Err(_) => Arena::new(cfg.window.width, cfg.window.height),
    };
    let art = ArtCtx {
        source: variant.art(),
        generated: &generated,
        sprites: &cfg.sprites,
        server: asset_server.as_deref(),
    };
    cancel_aim(&mut aim, &mut q_arrow);
    commands.insert_resource(arena);

    match variant.kind() {
        SceneKind::Golf => spawn_golf(&mut commands, &cfg, &arena, &art),
        SceneKind::Demolition => spawn_demolition(&mut commands, &cfg, &arena, &art),
    }
    spawn_arrow(&mut commands, &art);
    info!(
        target: "scene",
        "spawned '{}' ({}x{} arena, art={:?}, launch={:?})",
        variant.id(),
        arena.size.x,
        arena.size.y,
        variant.art(),
        variant.launch()
    );
}

fn finish_loading(mut next: ResMut<NextState<AppState>>) {
    next.set(AppState::Playing);
}

pub fn despawn_scene(mut commands: Commands, q: Query<Entity, With<SceneEntity>>) {
    let mut n = 0usize;
    for e in &q {
        commands.entity(e).despawn();
        n += 1;
    }
    debug!(target: "scene", "despawned {n} scene entities");
}

fn spawn_golf(commands: &mut Commands, cfg: &GameConfig, arena: &Arena, art: &ArtCtx) {
    let g = &cfg.golf;
    commands.insert_resource(ClearColor(GOLF_CLEAR));
    commands.spawn((
        SceneEntity,
        art.tiled(ArtRole::Grass, arena.size),
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));
    for slab in golf_walls(arena, g.wall_thickness) {
        spawn_slab(commands, slab, &g.wall, Sprite::from_color(WALL_WOOD, slab.size));
    }

    let hole = golf_hole_center(arena, g);
    commands.spawn((
        SceneEntity,
        HoleSensor,
        art.sprite(ArtRole::Hole, Vec2::splat(HOLE_TEX as f32)),
        Transform::from_translation(hole.extend(Z_HOLE)),
        Collider::ball(g.hole_radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
    ));

    spawn_ball(
        commands,
        golf_ball_spawn(arena, g),
        g.ball_radius,
        &g.ball,
        art,
        RigidBody::Dynamic,
    );
}

fn spawn_demolition(commands: &mut Commands, cfg: &GameConfig, arena: &Arena, art: &ArtCtx) {
    let d = &cfg.demolition;
    commands.insert_resource(ClearColor(DEMOLITION_CLEAR));

    let ground = demolition_ground(arena, d);
    let (ground_sprite, slot) = art.tiled(ArtRole::Ground, ground.size);
    spawn_slab(commands, ground, &d.ground, ground_sprite).insert(slot);

    let anchor = demolition_anchor(arena, d);
    let ground_top = demolition_ground_top(arena, d);
    let post_h = (anchor.y - ground_top).max(0.0);
    commands.spawn((
        SceneEntity,
        Sprite::from_color(SLING_POST, Vec2::new(10.0, post_h)),
        Transform::from_xyz(anchor.x, ground_top + post_h * 0.5, Z_STATIC),
    ));

    let half = d.box_size * 0.5;
    for slot in demolition_pyramid(arena, d) {
        commands.spawn((
            SceneEntity,
            CrateBox { home: slot.center },
            art.sprite(ArtRole::CrateBox, Vec2::splat(d.box_size)),
            Transform::from_translation(slot.center.extend(Z_BOXES)),
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            Velocity::zero(),
            body_material(&d.boxes),
        ));
    }

    let ball = spawn_ball(commands, anchor, d.ball_radius, &d.ball, art, RigidBody::Fixed);
    commands.entity(ball).insert(Racked);
}

fn spawn_slab<'a>(
    commands: &'a mut Commands,
    slab: Slab,
    material: &MaterialConfig,
    sprite: Sprite,
) -> EntityCommands<'a> {
    commands.spawn((
        SceneEntity,
        Wall,
        sprite,
        Transform::from_translation(slab.center.extend(Z_STATIC)),
        RigidBody::Fixed,
        Collider::cuboid(slab.size.x * 0.5, slab.size.y * 0.5),
        body_material(material),
    ))
}

fn spawn_ball(
    commands: &mut Commands,
    at: Vec2,
    radius: f32,
    material: &MaterialConfig,
    art: &ArtCtx,
    body: RigidBody,
) -> Entity {
    commands
        .spawn((
            SceneEntity,
            Ball,
            BallRadius(radius),
            BallHome(at),
            art.sprite(ArtRole::Ball, Vec2::splat(radius * 2.0)),
            Transform::from_translation(at.extend(Z_BALL)),
            body,
            Collider::ball(radius),
            Velocity::zero(),
            ExternalImpulse::default(),
            ReadMassProperties::default(),
            body_material(material),
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

fn spawn_arrow(commands: &mut Commands, art: &ArtCtx) {
    let (w, h) = ARROW_TEX;
    commands.spawn((
        SceneEntity,
        AimArrow,
        Sprite {
            image: art.image(ArtRole::Arrow),
            custom_size: Some(Vec2::new(w as f32, h as f32)),
            anchor: Anchor::CenterLeft,
            ..default()
        },
        ArtSlot(ArtRole::Arrow),
        Transform::from_xyz(0.0, 0.0, Z_ARROW),
        Visibility::Hidden,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::layout::pyramid_box_count;
    use crate::core::level::VariantId;
    use crate::rendering::textures::TexturesPlugin;
    use bevy::state::app::StatesPlugin;

    fn app_for(variant: VariantId) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(GameConfig::default())
            .insert_resource(ActiveVariant(variant))
            .insert_state(AppState::Loading)
            .add_plugins((TexturesPlugin, ScenePlugin));
        app
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<C>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn golf_scene_has_walls_hole_and_one_ball() {
        let mut app = app_for(VariantId::Golf);
        app.update();
        assert_eq!(count::<Wall>(&mut app), 4);
        assert_eq!(count::<HoleSensor>(&mut app), 1);
        assert_eq!(count::<Ball>(&mut app), 1);
        assert_eq!(count::<Racked>(&mut app), 0);
        assert_eq!(count::<AimArrow>(&mut app), 1);
    }

    #[test]
    fn demolition_scene_racks_ball_and_stacks_pyramid() {
        let mut app = app_for(VariantId::Demolition);
        app.update();
        let rows = GameConfig::default().demolition.pyramid_rows;
        assert_eq!(count::<CrateBox>(&mut app) as u64, pyramid_box_count(rows));
        assert_eq!(count::<Racked>(&mut app), 1);
        assert_eq!(count::<HoleSensor>(&mut app), 0);
    }

    #[test]
    fn loading_moves_to_playing_and_restart_rebuilds() {
        let mut app = app_for(VariantId::Golf);
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Playing
        );
        let before = count::<SceneEntity>(&mut app);
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Loading);
        app.update();
        app.update();
        assert_eq!(count::<SceneEntity>(&mut app), before);
        assert_eq!(count::<Ball>(&mut app), 1);
    }
}
