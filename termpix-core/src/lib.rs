// ABOUTME: termpix core library: turns decoded RGB pixels into truecolor terminal glyphs
// ABOUTME: Unpacks, fits to the terminal, box-filters and renders in a single pass

pub mod color;
pub mod error;
pub mod fit;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod resample;
pub mod unpack;

pub use color::Rgb;
pub use error::{RenderError, Result};
pub use fit::{fit, fit_with_override, framing_lines, TargetDimensions, TerminalSize};
pub use grid::ColorGrid;
pub use pipeline::{render_pass, RawImage, RenderReport};
pub use render::BlockRenderer;
pub use resample::{box_resample, spans};
pub use unpack::unpack;
