//! Headless menu -> scene -> restart flow, without Rapier or a window.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use flingball::app::menu::MenuPlugin;
use flingball::core::components::{CrateBox, HoleSensor, SceneEntity};
use flingball::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use flingball::gameplay::hud::{HudPlugin, HudText};
use flingball::gameplay::round::{RoundPlugin, Scoreboard};
use flingball::gameplay::scene::ScenePlugin;
use flingball::interaction::input::SceneKeysPlugin;
use flingball::rendering::textures::TexturesPlugin;
use flingball::{ActiveVariant, AppState, Ball, GameConfig, VariantId};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(GameConfig::default())
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ActiveVariant>()
        .init_state::<AppState>()
        .configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            TexturesPlugin,
            ScenePlugin,
            RoundPlugin,
            HudPlugin,
            SceneKeysPlugin,
            MenuPlugin,
        ));
    app.update();
    app
}

fn tap(app: &mut App, key: KeyCode) {
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(key);
    }
    app.update();
    // Nothing drives ButtonInput here, so drop the edge by hand.
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release_all();
        keys.clear();
    }
    // Loading build, then Playing enter.
    app.update();
    app.update();
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<C>>()
        .iter(app.world())
        .count()
}

#[test]
fn menu_to_golf_to_menu() {
    let mut app = app();
    assert_eq!(state(&app), AppState::MainMenu);

    tap(&mut app, KeyCode::Digit1);
    assert_eq!(state(&app), AppState::Playing);
    assert_eq!(app.world().resource::<ActiveVariant>().0, VariantId::Golf);
    assert_eq!(count::<HoleSensor>(&mut app), 1);
    assert_eq!(count::<HudText>(&mut app), 1);

    tap(&mut app, KeyCode::Escape);
    assert_eq!(state(&app), AppState::MainMenu);
    assert_eq!(count::<SceneEntity>(&mut app), 0);
}

#[test]
fn demolition_restart_rebuilds_pyramid() {
    let mut app = app();
    tap(&mut app, KeyCode::Digit4);
    assert_eq!(state(&app), AppState::Playing);
    let boxes = count::<CrateBox>(&mut app);
    assert_eq!(boxes, 15);

    tap(&mut app, KeyCode::KeyR);
    assert_eq!(state(&app), AppState::Playing);
    assert_eq!(count::<CrateBox>(&mut app), boxes);
    assert_eq!(count::<Ball>(&mut app), 1);
    assert_eq!(app.world().resource::<Scoreboard>().restarts, 1);
}
