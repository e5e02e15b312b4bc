// ABOUTME: Single-pass rendering pipeline: unpack, fit, resample, render
// ABOUTME: Borrows the decoder's buffer and writes the escape stream to any sink

use crate::error::Result;
use crate::fit::{fit_with_override, TargetDimensions, TerminalSize};
use crate::render::BlockRenderer;
use crate::resample::box_resample;
use crate::unpack::unpack;
use std::io::Write;

/// A decoded image as handed over by the decoder, not owned by the pipeline
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub source_width: u32,
    pub source_height: u32,
    pub target: TargetDimensions,
}

/// Render `image` to fit `terminal`, writing the escape stream to `out`.
///
/// The fitted size is clamped to the source so the resampler only ever
/// downsamples. Nothing is written when unpacking or fitting fails.
pub fn render_pass<W: Write>(
    image: &RawImage<'_>,
    terminal: TerminalSize,
    height_override: Option<u32>,
    out: &mut W,
) -> Result<RenderReport> {
    let source = unpack(image.pixels, image.width, image.height, image.channels)?;

    let target = fit_with_override(
        image.width,
        image.height,
        terminal.columns as u32,
        terminal.rows as u32,
        height_override,
    )?
    .clamp_to_source(image.width, image.height);

    let resampled = box_resample(&source, target)?;
    drop(source);

    BlockRenderer::new().render(&resampled, out)?;
    out.flush()?;

    Ok(RenderReport {
        source_width: image.width,
        source_height: image.height,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn test_solid_red_end_to_end() {
        let pixels: Vec<u8> = [255u8, 0, 0].repeat(16);
        let image = RawImage {
            pixels: &pixels,
            width: 4,
            height: 4,
            channels: 3,
        };

        // Two rows bind; a square image spans twice as many columns
        let mut out = Vec::new();
        let report = render_pass(&image, TerminalSize::new(80, 2), None, &mut out).unwrap();
        assert_eq!(report.target, TargetDimensions::new(4, 2));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[38;2;255;0;0m\u{2588}").count(), 8);
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_truncated_input_writes_nothing() {
        let pixels = vec![0u8; 10];
        let image = RawImage {
            pixels: &pixels,
            width: 2,
            height: 2,
            channels: 3,
        };

        let mut out = Vec::new();
        let result = render_pass(&image, TerminalSize::new(80, 24), None, &mut out);
        assert!(matches!(result, Err(RenderError::TruncatedInput { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_large_image_fills_terminal() {
        let pixels = vec![128u8; 400 * 100 * 3];
        let image = RawImage {
            pixels: &pixels,
            width: 400,
            height: 100,
            channels: 3,
        };

        let mut out = Vec::new();
        let report = render_pass(&image, TerminalSize::new(80, 24), None, &mut out).unwrap();
        assert_eq!(report.target, TargetDimensions::new(80, 10));
    }
}
