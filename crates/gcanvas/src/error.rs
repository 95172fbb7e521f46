//! Error types for the object model

use gcanvas_image::ImageError;
use gcanvas_paint::PaintError;
use thiserror::Error;

use crate::scene::ObjectId;

/// Errors raised by scene and shape operations
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// The id does not refer to a live object
    #[error("No object with id {0:?}")]
    NotFound(ObjectId),

    /// A container operation was applied to an object that is not a compound
    #[error("Object {0:?} is not a compound")]
    NotACompound(ObjectId),

    /// The compound was marked complete and no longer accepts changes
    #[error("Compound {0:?} has been marked as complete")]
    CompoundComplete(ObjectId),

    /// The polygon was marked complete and no longer accepts vertices
    #[error("Cannot add vertices to a polygon that has been marked as complete")]
    PolygonComplete,

    /// Relative edges need a starting vertex
    #[error("Polygon has no vertices to extend from")]
    EmptyPolygon,

    /// The compound would end up inside itself
    #[error("Cannot add compound {0:?} to itself or one of its descendants")]
    Cycle(ObjectId),

    /// Element index past the end of a container
    #[error("Index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// A typed handle pointed at an object of another type
    #[error("Object {0:?} has a different type than requested")]
    TypeMismatch(ObjectId),

    /// Invalid canvas configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Image loading failed
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Rendering failed
    #[error(transparent)]
    Paint(#[from] PaintError),
}

/// Result type for gcanvas operations
pub type Result<T> = std::result::Result<T, GraphicsError>;
