// ABOUTME: Terminal geometry collaborator: size queries, resize notifications, framing
// ABOUTME: Wraps crossterm behind a trait so the rendering pass can be driven by fixed sizes

use anyhow::{anyhow, bail, Result};
use crossterm::cursor::MoveUp;
use crossterm::event::Event;
use crossterm::queue;
use std::io::{self, Write};
use termpix_core::TerminalSize;

pub trait TerminalGeometry {
    /// Current terminal size in character cells
    fn size(&self) -> Result<TerminalSize>;
}

/// Queries the controlling terminal through crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermGeometry;

impl TerminalGeometry for CrosstermGeometry {
    fn size(&self) -> Result<TerminalSize> {
        let (columns, rows) = crossterm::terminal::size()
            .map_err(|e| anyhow!("Failed to get terminal size: {}", e))?;

        if columns == 0 || rows == 0 {
            bail!("Terminal reported a size of {}x{}", columns, rows);
        }

        Ok(TerminalSize::new(columns, rows))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedGeometry(pub TerminalSize);

impl TerminalGeometry for FixedGeometry {
    fn size(&self) -> Result<TerminalSize> {
        Ok(self.0)
    }
}

/// Latest known terminal size.
///
/// Resize notifications are delivered explicitly and the rendering pass
/// reads the cached value synchronously before fitting.
pub struct GeometryTracker<G> {
    source: G,
    fallback: TerminalSize,
    current: Option<TerminalSize>,
}

impl<G: TerminalGeometry> GeometryTracker<G> {
    pub fn new(source: G, fallback: TerminalSize) -> Self {
        Self {
            source,
            fallback,
            current: None,
        }
    }

    /// Re-query the terminal, keeping the last good size on failure
    pub fn refresh(&mut self) -> TerminalSize {
        match self.source.size() {
            Ok(size) => {
                self.current = Some(size);
                size
            }
            Err(e) => {
                let size = self.current.unwrap_or(self.fallback);
                log::warn!("{}; assuming {}x{}", e, size.columns, size.rows);
                size
            }
        }
    }

    pub fn notify_resize(&mut self, columns: u16, rows: u16) {
        if columns > 0 && rows > 0 {
            log::debug!("Terminal resized to {}x{}", columns, rows);
            self.current = Some(TerminalSize::new(columns, rows));
        }
    }

    /// Returns true when the event was a resize notification
    pub fn apply_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize(columns, rows) => {
                self.notify_resize(*columns, *rows);
                true
            }
            _ => false,
        }
    }

    pub fn current(&mut self) -> TerminalSize {
        match self.current {
            Some(size) => size,
            None => self.refresh(),
        }
    }
}

/// Subtract rows kept free for the prompt, never going below one row
pub fn usable(size: TerminalSize, reserve_rows: u16) -> TerminalSize {
    TerminalSize::new(size.columns, size.rows.saturating_sub(reserve_rows).max(1))
}

/// Scroll `lines` blank lines into view, then return the cursor to where it was
pub fn reserve_framing<W: Write>(out: &mut W, lines: u16) -> io::Result<()> {
    if lines == 0 {
        return Ok(());
    }

    out.write_all("\n".repeat(lines as usize).as_bytes())?;
    queue!(out, MoveUp(lines))?;
    Ok(())
}
