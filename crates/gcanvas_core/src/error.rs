//! Error types for gcanvas_core

use thiserror::Error;

/// Errors raised by the core value types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A color string was neither a known name nor a hex literal
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for gcanvas_core operations
pub type Result<T> = std::result::Result<T, Error>;
