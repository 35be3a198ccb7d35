use bevy::prelude::*;

/// The single 2D camera. Its origin is the arena centre, so screen space maps
/// onto world space one pixel per unit with +Y up.
#[derive(Component)]
pub struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("main_camera"), MainCamera, Camera2d));
}
