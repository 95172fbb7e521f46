//! gcanvas Paint/Canvas API
//!
//! [`Rasterizer`] paints onto an RGBA pixmap with tiny-skia and exports PNG.
//! It draws directly as a [`DrawContext`] or replays commands captured by a
//! [`RecordingContext`].
//!
//! # Example
//!
//! ```
//! use gcanvas_core::{Color, DrawContext, Rect, Size};
//! use gcanvas_paint::{Rasterizer, RecordingContext};
//!
//! let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
//! ctx.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), Color::BLUE);
//!
//! let mut raster = Rasterizer::new(100, 100).unwrap();
//! raster.replay(ctx.commands());
//! assert_eq!(raster.pixel(15, 15), Some([0, 0, 255, 255]));
//! ```

pub mod error;
pub mod raster;

pub use gcanvas_core::{
    Color, DrawCommand, DrawContext, DrawContextExt, FillRule, ImageId, ImageOptions, LineCap,
    LineJoin, Path, Point, RecordingContext, Rect, Size, Stroke, TextStyle, Transform,
};

pub use error::{PaintError, Result};
pub use raster::Rasterizer;
