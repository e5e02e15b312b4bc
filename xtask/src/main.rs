// ABOUTME: xtask binary for build automation and test fixture generation
// ABOUTME: Writes deterministic PNG images for manually smoke testing termpix

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for termpix")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write PNG fixtures (solid, checkerboard, gradient, rgba) into a directory
    Fixtures {
        /// Output directory, created if missing
        #[arg(default_value = "fixtures")]
        out_dir: PathBuf,

        /// Edge length of the generated images in pixels
        #[arg(long, default_value = "256", value_parser = clap::value_parser!(u32).range(2..=4096))]
        size: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fixtures { out_dir, size } => {
            println!("Writing fixtures to {}...", out_dir.display());
            write_fixtures(&out_dir, size)?;
        }
    }

    Ok(())
}

fn write_fixtures(out_dir: &Path, size: u32) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let solid = RgbImage::from_pixel(size, size, Rgb([255, 0, 0]));
    save_rgb(&solid, &out_dir.join("solid.png"))?;

    let cell = (size / 8).max(1);
    let checker = RgbImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    save_rgb(&checker, &out_dir.join("checkerboard.png"))?;

    // Wider than tall to exercise the width-constrained fit
    let gradient = RgbImage::from_fn(size * 2, size, |x, y| {
        Rgb([
            (x * 255 / (size * 2 - 1)) as u8,
            (y * 255 / (size - 1)) as u8,
            128,
        ])
    });
    save_rgb(&gradient, &out_dir.join("gradient.png"))?;

    let rgba = RgbaImage::from_fn(size, size, |x, _| {
        Rgba([0, 128, 255, (x * 255 / (size - 1)) as u8])
    });
    let path = out_dir.join("rgba.png");
    rgba.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  {}", path.display());

    println!("Fixtures written successfully");
    Ok(())
}

fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  {}", path.display());
    Ok(())
}
