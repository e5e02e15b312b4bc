// ABOUTME: Truecolor block-glyph renderer for resampled color grids
// ABOUTME: Emits one 24-bit foreground escape plus a full block per cell, then a reset

use crate::color::Rgb;
use crate::grid::ColorGrid;
use std::io::{self, Write};

/// U+2588 FULL BLOCK
pub const FULL_BLOCK: char = '\u{2588}';

/// SGR reset, emitted once after the last row
pub const RESET: &str = "\x1b[0m";

/// ANSI 24-bit foreground color directive for `color`
pub fn foreground(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRenderer;

impl BlockRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write `grid` row by row, left to right
    pub fn render<W: Write>(&self, grid: &ColorGrid, out: &mut W) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        let glyph = FULL_BLOCK.encode_utf8(&mut utf8).as_bytes();

        for row in grid.rows() {
            for color in row {
                write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)?;
                out.write_all(glyph)?;
            }
            out.write_all(b"\n")?;
        }
        out.write_all(RESET.as_bytes())?;

        Ok(())
    }

    pub fn render_to_string(&self, grid: &ColorGrid) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(grid, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
