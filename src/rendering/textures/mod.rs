pub mod procedural;
pub mod raster;

pub use procedural::{ArtRole, GeneratedArt};

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::config::SpritesConfig;
use crate::core::level::{ActiveVariant, ArtSource};

/// Tags a sprite whose image came from a file so it can fall back to generated art.
#[derive(Component, Debug, Clone, Copy)]
pub struct ArtSlot(pub ArtRole);

pub struct TexturesPlugin;

impl Plugin for TexturesPlugin {
    fn build(&self, app: &mut App) {
        // Tests often run with only MinimalPlugins; ensure the image storage exists.
        if app.world().get_resource::<Assets<Image>>().is_none() {
            app.init_resource::<Assets<Image>>();
        }
        let art = {
            let mut images = app.world_mut().resource_mut::<Assets<Image>>();
            GeneratedArt::build(&mut images)
        };
        app.insert_resource(art)
            .add_systems(Update, fall_back_on_failed_loads);
    }
}

pub fn sprite_path(cfg: &SpritesConfig, role: ArtRole) -> &str {
    match role {
        ArtRole::Ball => &cfg.ball,
        ArtRole::Hole => &cfg.hole,
        ArtRole::Arrow => &cfg.arrow,
        ArtRole::Grass => &cfg.grass,
        ArtRole::CrateBox => &cfg.crate_box,
        ArtRole::Ground => &cfg.ground,
    }
}

/// Image for `role` under the active variant's art source.
/// Without an asset server (headless runs) generated art is used.
pub fn art_handle(
    role: ArtRole,
    source: ArtSource,
    generated: &GeneratedArt,
    cfg: &SpritesConfig,
    asset_server: Option<&AssetServer>,
) -> Handle<Image> {
    match (source, asset_server) {
        (ArtSource::Files, Some(server)) => server.load(sprite_path(cfg, role).to_owned()),
        _ => generated.get(role),
    }
}

fn fall_back_on_failed_loads(
    asset_server: Option<Res<AssetServer>>,
    generated: Res<GeneratedArt>,
    variant: Option<Res<ActiveVariant>>,
    mut q: Query<(&mut Sprite, &ArtSlot)>,
) {
    let (Some(server), Some(variant)) = (asset_server, variant) else {
        return;
    };
    if variant.art() != ArtSource::Files {
        return;
    }
    for (mut sprite, slot) in &mut q {
        if let LoadState::Failed(err) = server.load_state(sprite.image.id()) {
            warn!(
                target: "assets",
                "{} sprite failed to load ({err}); using generated art",
                slot.0.file_stem()
            );
            sprite.image = generated.get(slot.0);
        }
    }
}
