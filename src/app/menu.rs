use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::AppState;
use crate::core::level::{ActiveVariant, VariantId};
use crate::rendering::palette::palette::{HUD_TEXT, MENU_BG};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::MainMenu), (log_menu, spawn_menu_ui))
            .add_systems(
                Update,
                handle_menu_input
                    .run_if(in_state(AppState::MainMenu))
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(OnExit(AppState::MainMenu), despawn_menu_ui);
    }
}

const DIGITS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

/// Menu body, one numbered line per variant.
pub fn menu_text() -> String {
    let mut s = String::from("FLINGBALL\n\nPress a number to play:\n");
    for (i, v) in VariantId::ALL.iter().enumerate() {
        s.push_str(&format!("  {}: {}\n", i + 1, v.title()));
    }
    s.push_str("\nIn game: drag to aim, release to shoot. [R] restart, [Esc] menu");
    s
}

fn log_menu() {
    info!(target: "menu", "=== MAIN MENU ===");
    for (i, v) in VariantId::ALL.iter().enumerate() {
        info!(target: "menu", "  {}: {} ({})", i + 1, v.title(), v.id());
    }
}

fn handle_menu_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let picked = DIGITS
        .iter()
        .zip(VariantId::ALL)
        .find(|(k, _)| keys.just_pressed(**k))
        .map(|(_, v)| v);
    if let Some(v) = picked {
        info!(target: "menu", "selected '{}'", v.id());
        // Resource lands before the Loading systems run.
        commands.insert_resource(ActiveVariant(v));
        next_state.set(AppState::Loading);
    }
}

#[derive(Component)]
struct MenuUiRoot;

fn spawn_menu_ui(mut commands: Commands) {
    commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(MENU_BG),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(menu_text()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(HUD_TEXT),
            ));
        });
}

fn despawn_menu_ui(mut commands: Commands, q_root: Query<Entity, With<MenuUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_state::<AppState>()
            .add_plugins(MenuPlugin);
        app.update();
        app
    }

    #[test]
    fn menu_lists_every_variant() {
        let text = menu_text();
        for (i, v) in VariantId::ALL.iter().enumerate() {
            assert!(text.contains(&format!("{}: {}", i + 1, v.title())));
        }
    }

    #[test]
    fn digit_selects_variant_and_leaves_menu() {
        let mut app = app();
        assert_eq!(
            app.world_mut()
                .query_filtered::<Entity, With<MenuUiRoot>>()
                .iter(app.world())
                .count(),
            1
        );
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Digit3);
        app.update();
        app.update();
        assert_eq!(
            app.world().resource::<ActiveVariant>().0,
            VariantId::Demolition
        );
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Loading
        );
        assert_eq!(
            app.world_mut()
                .query_filtered::<Entity, With<MenuUiRoot>>()
                .iter(app.world())
                .count(),
            0
        );
    }
}
