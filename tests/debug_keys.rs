#![cfg(feature = "debug")]
use bevy::prelude::*;
use flingball::debug::keys::debug_key_input_system;
use flingball::debug::DebugState;

#[test]
fn f1_toggles_wireframe() {
    let mut app = App::new();
    // Insert only the resources we need.
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::F1);
    }
    app.update();
    assert!(app.world().resource::<DebugState>().wireframe);

    // Held, not re-pressed: no change. Nothing clears edges here, so do it by hand.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    assert!(app.world().resource::<DebugState>().wireframe);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::F1);
        input.clear();
        input.press(KeyCode::F1);
    }
    app.update();
    assert!(!app.world().resource::<DebugState>().wireframe);
}
