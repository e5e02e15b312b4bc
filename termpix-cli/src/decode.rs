// ABOUTME: Image decoding collaborator built on the image crate
// ABOUTME: Produces a flat interleaved RGB or RGBA buffer for the core pipeline

use anyhow::{anyhow, bail, Context, Result};
use image::DynamicImage;
use std::path::Path;
use termpix_core::RawImage;

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl DecodedImage {
    /// Images with alpha keep four channels, everything else becomes RGB
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (pixels, channels) = if img.color().has_alpha() {
            (img.into_rgba8().into_raw(), 4)
        } else {
            (img.into_rgb8().into_raw(), 3)
        };

        Self {
            pixels,
            width,
            height,
            channels,
        }
    }

    pub fn as_raw(&self) -> RawImage<'_> {
        RawImage {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

/// Decode the image file at `path`
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    if !path.exists() {
        bail!("No such file: {}", path.display());
    }

    let reader = image::ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if reader.format().is_none() {
        bail!("Not a recognized image format: {}", path.display());
    }

    let img = reader
        .decode()
        .map_err(|e| anyhow!("Failed to decode image {}: {}", path.display(), e))?;

    let decoded = DecodedImage::from_dynamic(img);
    log::debug!(
        "Decoded {} as {}x{} with {} channels",
        path.display(),
        decoded.width,
        decoded.height,
        decoded.channels
    );

    Ok(decoded)
}

/// Decode an in-memory encoded image
pub fn decode_bytes(data: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(data).map_err(|e| anyhow!("Failed to decode image: {}", e))?;
    Ok(DecodedImage::from_dynamic(img))
}
