use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{CrateBox, SceneEntity};
use crate::core::config::GameConfig;
use crate::core::level::{ActiveVariant, SceneKind};
use crate::gameplay::outcome::is_toppled;
use crate::gameplay::round::Scoreboard;
use crate::rendering::palette::palette::HUD_TEXT;

#[derive(Component)]
pub struct HudText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_hud)
            .add_systems(Update, update_hud.run_if(in_state(AppState::Playing)));
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        SceneEntity,
        HudText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(HUD_TEXT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn hud_line(variant: &ActiveVariant, score: &Scoreboard, toppled: Option<(usize, usize)>) -> String {
    match (variant.kind(), toppled) {
        (SceneKind::Demolition, Some((down, total))) => format!(
            "{}  shots {}  toppled {}/{}  [R]estart [Esc] menu",
            variant.title(),
            score.shots,
            down,
            total
        ),
        _ => format!(
            "{}  shots {}  holes {}  [R]estart [Esc] menu",
            variant.title(),
            score.shots,
            score.holes
        ),
    }
}

fn update_hud(
    variant: Res<ActiveVariant>,
    score: Res<Scoreboard>,
    cfg: Res<GameConfig>,
    q_boxes: Query<(&CrateBox, &Transform)>,
    mut q_text: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let toppled = (variant.kind() == SceneKind::Demolition).then(|| {
        let size = cfg.demolition.box_size;
        let total = q_boxes.iter().count();
        let down = q_boxes
            .iter()
            .filter(|(b, tf)| {
                let angle = tf.rotation.to_euler(EulerRot::ZYX).0;
                is_toppled(b.home, tf.translation.truncate(), angle, size)
            })
            .count();
        (down, total)
    });
    let line = hud_line(&variant, &score, toppled);
    if text.as_str() != line {
        *text = Text::new(line);
    }
}
