//! Texture baking utility
//!
//! Writes the generated placeholder art as PNG files so the sprite variants
//! have something to load (and artists have something to replace).
//!
//! Example:
//!   cargo run --bin bake_textures -- --out assets/textures

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flingball::rendering::textures::ArtRole;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bake placeholder sprite PNGs", long_about = None)]
struct Args {
    #[arg(long, default_value = "assets/textures")]
    out: PathBuf,
    /// Leave existing files alone.
    #[arg(long)]
    keep_existing: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out).with_context(|| format!("create {:?}", args.out))?;
    for role in ArtRole::ALL {
        let path = args.out.join(format!("{}.png", role.file_stem()));
        if args.keep_existing && path.exists() {
            println!("skip  {}", path.display());
            continue;
        }
        let img = role.render();
        img.save(&path)
            .with_context(|| format!("write {}", path.display()))?;
        println!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    }
    Ok(())
}
