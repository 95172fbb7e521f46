//! Image error types

use thiserror::Error;

/// Errors that can occur when loading or slicing images
#[derive(Error, Debug)]
pub enum ImageError {
    /// The bytes could not be decoded as an image
    #[error("Image decode error: {0}")]
    Decode(String),

    /// The image file could not be read
    #[error("Failed to load image file: {0}")]
    FileLoad(String),

    /// Invalid base64 payload or data URI
    #[error("Base64 decode error: {0}")]
    Base64(String),

    /// A region or frame lies outside the image
    #[error("Region out of bounds: {0}")]
    OutOfBounds(String),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
