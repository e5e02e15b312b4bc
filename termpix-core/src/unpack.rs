// ABOUTME: Converts a flat channel-interleaved decoder buffer into a ColorGrid
// ABOUTME: Reads the first three channels of each pixel and rejects short buffers up front

use crate::color::Rgb;
use crate::error::{RenderError, Result};
use crate::grid::ColorGrid;

/// Minimum channel count the unpacker understands (red, green, blue)
pub const RGB_CHANNELS: u8 = 3;

/// Unpack `buffer` into a `width` x `height` grid.
///
/// Pixels are read with a stride of `channels` bytes; any channel after the
/// third is skipped. The whole buffer is validated before the grid is
/// allocated, so a truncated buffer never produces a partial grid.
pub fn unpack(buffer: &[u8], width: u32, height: u32, channels: u8) -> Result<ColorGrid> {
    if channels < RGB_CHANNELS {
        return Err(RenderError::UnsupportedChannels(channels));
    }
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }

    let stride = channels as usize;
    let pixel_count = width as usize * height as usize;
    let expected = required_len(pixel_count, stride).ok_or(RenderError::TruncatedInput {
        expected: usize::MAX,
        actual: buffer.len(),
    })?;

    if buffer.len() < expected {
        return Err(RenderError::TruncatedInput {
            expected,
            actual: buffer.len(),
        });
    }

    let pixels: Vec<Rgb> = buffer
        .chunks(stride)
        .take(pixel_count)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    log::debug!(
        "Unpacked {}x{} pixels from {} bytes ({} channels)",
        width,
        height,
        buffer.len(),
        channels
    );

    ColorGrid::from_pixels(width, height, pixels)
}

/// Bytes needed so that the last pixel's offset plus 2 is still in bounds
fn required_len(pixel_count: usize, stride: usize) -> Option<usize> {
    (pixel_count - 1).checked_mul(stride)?.checked_add(3)
}
