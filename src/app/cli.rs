use std::path::PathBuf;

use clap::Parser;

use crate::interaction::session::ConfigReloadSettings;

/// Config layers read when no `--config` is given; later files override earlier ones.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Drag-and-release ball games", long_about = None)]
pub struct Cli {
    /// Start straight into a variant (golf, golf_sprites, demolition, demolition_sprites)
    /// instead of the menu.
    #[arg(long)]
    pub variant: Option<String>,
    /// Config layer to merge; repeatable.
    #[arg(long = "config")]
    pub config: Vec<PathBuf>,
}

impl Cli {
    pub fn config_layers(&self) -> Vec<PathBuf> {
        if self.config.is_empty() {
            DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect()
        } else {
            self.config.clone()
        }
    }

    /// Hot reload watches the same layers the config was loaded from.
    pub fn reload_settings(&self) -> ConfigReloadSettings {
        ConfigReloadSettings::for_layers(self.config_layers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_both_layers() {
        let cli = Cli::try_parse_from(["flingball"]).unwrap();
        assert!(cli.variant.is_none());
        assert_eq!(cli.config_layers().len(), 2);
    }

    #[test]
    fn explicit_layers_replace_defaults() {
        let cli = Cli::try_parse_from([
            "flingball",
            "--variant",
            "demolition",
            "--config",
            "a.ron",
            "--config",
            "b.ron",
        ])
        .unwrap();
        assert_eq!(cli.variant.as_deref(), Some("demolition"));
        assert_eq!(
            cli.config_layers(),
            vec![PathBuf::from("a.ron"), PathBuf::from("b.ron")]
        );
        assert_eq!(cli.reload_settings().paths, cli.config_layers());
    }

    #[test]
    fn default_reload_paths_match_default_layers() {
        let cli = Cli::try_parse_from(["flingball"]).unwrap();
        assert_eq!(
            cli.reload_settings().paths,
            ConfigReloadSettings::default().paths
        );
    }
}
