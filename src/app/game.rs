// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::menu::MenuPlugin;
use super::state::AppState;
use crate::core::config::GameConfig;
use crate::core::level::{ActiveVariant, VariantId};
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::hud::HudPlugin;
use crate::gameplay::round::RoundPlugin;
use crate::gameplay::scene::ScenePlugin;
use crate::interaction::input::{InputInteractionPlugin, SceneKeysPlugin};
use crate::interaction::session::{AutoClosePlugin, ConfigHotReloadPlugin};
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::textures::TexturesPlugin;

/// Warnings collected while loading config, logged once the app is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub layers: Vec<String>,
    pub warnings: Vec<String>,
}

/// Everything except windowing. `start` skips the menu.
#[derive(Default)]
pub struct GamePlugin {
    pub start: Option<VariantId>,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::default());
        }
        match self.start {
            Some(v) => {
                app.insert_resource(ActiveVariant(v))
                    .insert_state(AppState::Loading);
            }
            None => {
                app.init_resource::<ActiveVariant>().init_state::<AppState>();
            }
        }
        app.init_resource::<ConfigDiagnostics>()
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                CameraPlugin,
                TexturesPlugin,
                PhysicsSetupPlugin,
                ScenePlugin,
                RoundPlugin,
                HudPlugin,
                InputInteractionPlugin,
                SceneKeysPlugin,
                MenuPlugin,
                DebugPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
            ))
            .add_systems(Startup, log_config_diagnostics);
    }
}

fn log_config_diagnostics(cfg: Res<GameConfig>, diag: Res<ConfigDiagnostics>) {
    if diag.layers.is_empty() {
        info!(target: "config", "no config layers found; using defaults");
    } else {
        info!(target: "config", layers = ?diag.layers, "config layers loaded");
    }
    for w in &diag.warnings {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    info!(
        target: "config",
        "window {}x{} '{}' default_variant='{}'",
        cfg.window.width, cfg.window.height, cfg.window.title, cfg.default_variant
    );
}
