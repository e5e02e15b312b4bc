// ABOUTME: Aspect-ratio-aware fitting of a source image into a terminal cell grid
// ABOUTME: Chooses a height- or width-constrained target, correcting for 2:1 glyph cells

use crate::error::{RenderError, Result};

/// A terminal cell is roughly twice as tall as it is wide
pub const GLYPH_ASPECT: f64 = 2.0;

/// Usable terminal geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// Output grid size; `width` maps to columns and `height` to rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl TargetDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrink uniformly so neither axis exceeds the source.
    ///
    /// The box filter only downsamples, so a small image in a large terminal
    /// is rendered at the largest size that keeps its fitted proportions.
    pub fn clamp_to_source(self, source_width: u32, source_height: u32) -> Self {
        if self.width <= source_width && self.height <= source_height {
            return self;
        }

        let (sw, sh) = (source_width as u64, source_height as u64);
        let (w, h) = (self.width as u64, self.height as u64);

        // Compare sw/w against sh/h without floating point
        let (width, height) = if sw * h <= sh * w {
            (sw, h * sw / w)
        } else {
            (w * sh / h, sh)
        };

        Self {
            width: (width as u32).clamp(1, source_width.max(1)),
            height: (height as u32).clamp(1, source_height.max(1)),
        }
    }
}

/// Fit a `source_width` x `source_height` image into `columns` x `rows` cells
pub fn fit(
    source_width: u32,
    source_height: u32,
    columns: u32,
    rows: u32,
) -> Result<TargetDimensions> {
    if source_width == 0 || source_height == 0 {
        return Err(RenderError::EmptyImage {
            width: source_width,
            height: source_height,
        });
    }
    if columns == 0 || rows == 0 {
        return Err(RenderError::InvalidGeometry(format!(
            "terminal is {}x{} cells",
            columns, rows
        )));
    }

    let source_ratio = source_width as f64 / source_height as f64;
    let terminal_ratio = columns as f64 / (GLYPH_ASPECT * rows as f64);

    let (width, height) = if terminal_ratio >= source_ratio {
        // Terminal is relatively wider: rows are the binding constraint
        let height = rows;
        let width = (GLYPH_ASPECT * height as f64 * source_ratio).floor() as u32;
        (width, height)
    } else {
        let width = columns;
        let height = (width as f64 / (GLYPH_ASPECT * source_ratio)).floor() as u32;
        (width, height)
    };

    let target = TargetDimensions::new(width.max(1), height.max(1));
    log::debug!(
        "Fitted {}x{} image into {}x{} cells as {}x{} ({})",
        source_width,
        source_height,
        columns,
        rows,
        target.width,
        target.height,
        if terminal_ratio >= source_ratio {
            "height-constrained"
        } else {
            "width-constrained"
        }
    );

    Ok(target)
}

/// Like [`fit`], but an explicit height replaces the terminal's row count
pub fn fit_with_override(
    source_width: u32,
    source_height: u32,
    columns: u32,
    rows: u32,
    height_override: Option<u32>,
) -> Result<TargetDimensions> {
    fit(
        source_width,
        source_height,
        columns,
        height_override.unwrap_or(rows),
    )
}

/// Terminal lines reserved for framing when an explicit height is given
pub fn framing_lines(height: u32) -> u32 {
    height.saturating_add(2).div_ceil(2)
}
