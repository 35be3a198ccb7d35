use std::fs;

use flingball::core::config::GameConfig;

#[test]
fn local_layer_overrides_only_what_it_names() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 640.0, height: 960.0, title: "Base", autoClose: 0.0),
            aim: (max_power: 180.0, velocity_per_power: 8.0),
            demolition: (pyramid_rows: 4),
        )"#,
    )
    .unwrap();
    fs::write(&local, r#"(window: (title: "Local"), aim: (max_power: 120.0))"#).unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Local");
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.aim.max_power, 120.0);
    assert_eq!(cfg.aim.velocity_per_power, 8.0);
    assert_eq!(cfg.demolition.pyramid_rows, 4);
}

#[test]
fn missing_local_layer_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    fs::write(&base, "(default_variant: \"demolition\")").unwrap();
    let (cfg, used, errors) =
        GameConfig::load_layered([base.clone(), dir.path().join("game.local.ron")]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg.default_variant, "demolition");
}

#[test]
fn broken_layer_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(&base, "(aim: (max_power: 150.0))").unwrap();
    fs::write(&local, "(aim: (max_power: ").unwrap();
    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"));
    assert_eq!(cfg.aim.max_power, 150.0);
}

#[test]
fn shipped_config_parses_and_validates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let cfg = GameConfig::load_from_file(path).unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}
