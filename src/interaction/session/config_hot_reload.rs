//! Native-only polling of the config layers. Edits to a watched file are
//! merged again and swapped into [`GameConfig`]; the next scene build picks
//! them up, window settings apply immediately.

use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::Duration, time::SystemTime};

use crate::app::cli::DEFAULT_CONFIG_LAYERS;
use crate::core::config::GameConfig;

/// Which files are watched. Insert before [`ConfigHotReloadPlugin`] when the
/// config came from non-default layers.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}

impl ConfigReloadSettings {
    pub fn for_layers(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Default::default()
        }
    }
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ReloadWatch {
    seen: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl Default for ReloadWatch {
    fn default() -> Self {
        Self {
            seen: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ReloadWatch>()
                .add_systems(Startup, remember_mtimes)
                .add_systems(Update, poll_config_files);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

/// Newest modification time per existing path.
fn mtimes(paths: &[PathBuf]) -> impl Iterator<Item = (PathBuf, SystemTime)> + '_ {
    paths.iter().filter_map(|p| {
        let modified = std::fs::metadata(p).and_then(|m| m.modified()).ok()?;
        Some((p.clone(), modified))
    })
}

/// The config was already loaded from these files at startup.
fn remember_mtimes(settings: Res<ConfigReloadSettings>, mut watch: ResMut<ReloadWatch>) {
    watch.seen.extend(mtimes(&settings.paths));
}

fn poll_config_files(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut watch: ResMut<ReloadWatch>,
    mut cfg: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
) {
    let interval = Duration::from_secs_f32(settings.interval_secs.max(0.05));
    if watch.timer.duration() != interval {
        watch.timer.set_duration(interval);
    }
    if !watch.timer.tick(time.delta()).just_finished() {
        return;
    }
    let mut dirty = false;
    for (path, modified) in mtimes(&settings.paths) {
        let prev = watch.seen.insert(path, modified);
        dirty |= prev.is_none_or(|p| modified > p);
    }
    if !dirty {
        return;
    }

    let (next, used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in &errors {
        warn!(target: "config", "hot-reload: {e}");
    }
    for w in next.validate() {
        warn!(target: "config", "hot-reload: {w}");
    }
    if *cfg == next {
        return;
    }
    info!(target: "config", "reloaded from {used:?}; changes apply on the next restart");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != next.window.width || window.height() != next.window.height {
            window.resolution.set(next.window.width, next.window.height);
        }
        if window.title != next.window.title {
            window.title.clone_from(&next.window.title);
        }
    }
    *cfg = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::io::Write;

    #[test]
    fn edited_layer_replaces_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        std::fs::write(&path, "(aim: (max_power: 150.0))").unwrap();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(ConfigReloadSettings {
                paths: vec![path.clone()],
                interval_secs: 0.1,
            })
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)))
            .init_resource::<ReloadWatch>()
            .add_systems(Update, poll_config_files);
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<GameConfig>().aim.max_power, 150.0);

        // Unchanged files are not re-read.
        app.world_mut().resource_mut::<GameConfig>().aim.max_power = 99.0;
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<GameConfig>().aim.max_power, 99.0);

        let mut f = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(f).unwrap();
        drop(f);
        let later = SystemTime::now() + Duration::from_secs(5);
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(later)
            .unwrap();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<GameConfig>().aim.max_power, 150.0);
    }

    #[test]
    fn plugin_watches_the_layers_it_was_given() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        std::fs::write(&path, "(aim: (max_power: 150.0))").unwrap();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .insert_resource(ConfigReloadSettings::for_layers(vec![path.clone()]))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(600)))
            .add_plugins(ConfigHotReloadPlugin);
        app.update();
        assert_eq!(
            app.world().resource::<ConfigReloadSettings>().paths,
            vec![path.clone()]
        );

        std::fs::write(&path, "(aim: (max_power: 120.0))").unwrap();
        let later = SystemTime::now() + Duration::from_secs(5);
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(later)
            .unwrap();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<GameConfig>().aim.max_power, 120.0);
    }
}
