// ABOUTME: Error types for the termpix rendering pipeline with user-facing messages
// ABOUTME: Separates input errors (bad pixel data) from geometry errors (bad sizes)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Truncated input: expected at least {expected} bytes of pixel data, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Unsupported channel count {0}: only RGB images are supported")]
    UnsupportedChannels(u8),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Cannot upsample {source_width}x{source_height} to {target_width}x{target_height}")]
    Upsample {
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    },

    #[error("Grid of {width}x{height} needs {expected} pixels, got {actual}")]
    GridSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            RenderError::TruncatedInput { .. } => {
                Some("The decoder returned less data than the image dimensions require")
            }
            RenderError::UnsupportedChannels(_) => {
                Some("Convert the image to RGB before rendering it")
            }
            RenderError::EmptyImage { .. } => Some("Check that the file contains a valid image"),
            RenderError::InvalidGeometry(_) => {
                Some("Terminal width and height must both be at least 1")
            }
            _ => None,
        }
    }

    /// Input errors are caused by the pixel data rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RenderError::TruncatedInput { .. }
                | RenderError::UnsupportedChannels(_)
                | RenderError::EmptyImage { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
