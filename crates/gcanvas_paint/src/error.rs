//! Paint error types

use std::io;
use thiserror::Error;

/// Errors that can occur while rasterizing or exporting a surface
#[derive(Error, Debug)]
pub enum PaintError {
    /// The requested surface has a zero or non-finite dimension
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// IO error when writing the output file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
