//! gcanvas core types
//!
//! This crate provides the foundational value types for the gcanvas
//! graphics library:
//!
//! - **Geometry**: points, sizes, rectangles and affine transforms
//! - **Color**: RGBA colors with the classic named palette
//! - **Draw Context**: the rendering seam shapes paint through, plus a
//!   recording implementation for tests and deferred execution
//!
//! # Example
//!
//! ```rust
//! use gcanvas_core::{Color, Point, Rect};
//!
//! let frame = Rect::new(10.0, 10.0, 100.0, 50.0);
//! assert!(frame.contains(Point::new(50.0, 30.0)));
//! assert_eq!(Color::parse("orange").unwrap(), Color::ORANGE);
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use draw::{
    replay, DrawCommand, DrawContext, DrawContextExt, FillRule, FontStyle, FontWeight, ImageId,
    ImageOptions, LineCap, LineJoin, Path, PathCommand, RecordingContext, Stroke, TextStyle,
};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size, Transform, Vec2};
