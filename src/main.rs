// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierDebugRenderPlugin;
use clap::Parser;

use flingball::app::cli::Cli;
use flingball::{ConfigDiagnostics, GameConfig, GamePlugin, VariantId};

#[cfg(target_arch = "wasm32")]
fn load_config(_cli: &Cli) -> (GameConfig, ConfigDiagnostics) {
    // Embedded base config; no local layer on wasm.
    const RAW: &str = include_str!("../assets/config/game.ron");
    let mut diag = ConfigDiagnostics::default();
    let cfg = match ron::from_str(RAW) {
        Ok(cfg) => {
            diag.layers.push("embedded game.ron".into());
            cfg
        }
        Err(e) => {
            diag.warnings.push(format!("embedded config parse failure: {e}; using defaults"));
            GameConfig::default()
        }
    };
    (cfg, diag)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(cli: &Cli) -> (GameConfig, ConfigDiagnostics) {
    let (cfg, used, errors) = GameConfig::load_layered(cli.config_layers());
    (
        cfg,
        ConfigDiagnostics {
            layers: used,
            warnings: errors,
        },
    )
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let cli = Cli::parse();
    let (cfg, mut diag) = load_config(&cli);
    diag.warnings.extend(cfg.validate());

    // CLI wins over the config; neither (or an unknown id) means the menu.
    let requested = cli
        .variant
        .as_deref()
        .or(Some(cfg.default_variant.as_str()))
        .filter(|s| !s.trim().is_empty());
    let start = requested.and_then(|id| {
        let v = VariantId::from_id(id);
        if v.is_none() {
            diag.warnings
                .push(format!("unknown variant '{id}'; showing the menu"));
        }
        v
    });

    let window_title = cfg.window.title.clone();
    let rapier_debug = cfg.rapier_debug;

    let mut app = App::new();
    app.insert_resource(cfg.clone()).insert_resource(diag);
    // Watch whatever `--config` layers were loaded, not the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    app.insert_resource(cli.reload_settings());
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .add_plugins(GamePlugin { start });

    // With the debug feature the wireframe is always available behind F1;
    // without it only `rapier_debug: true` turns it on.
    #[cfg(feature = "debug")]
    {
        app.add_plugins(RapierDebugRenderPlugin {
            enabled: rapier_debug,
            ..Default::default()
        });
    }
    #[cfg(not(feature = "debug"))]
    {
        if rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }

    app.run();
}
