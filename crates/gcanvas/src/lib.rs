//! gcanvas object model
//!
//! A scene graph of drawable shapes in the style of the ACM Java graphics
//! library: create shapes, add them to a [`GCanvas`], move them around, and
//! let the canvas repaint.
//!
//! - **Shapes**: [`GRect`], [`GRoundRect`], [`GOval`], [`GLine`], [`GArc`],
//!   [`GPolygon`], [`GImage`], [`GLabel`]
//! - **Containers**: [`GCompound`] groups objects under a shared origin
//! - **Games**: [`GSprite`] adds velocity, acceleration, frame animation and
//!   collision rectangles
//! - **Canvas**: [`GCanvas`] owns the [`Scene`], handles z-order, repaint
//!   notification and touch dispatch
//!
//! # Example
//!
//! ```rust
//! use gcanvas::{Color, GCanvas, GFillable, GObject, GOval, GRect};
//!
//! let mut canvas = GCanvas::new(200, 100);
//! let ball = canvas.add_at(GOval::new(20.0, 20.0), 10.0, 10.0);
//! let wall = canvas.add(GRect::with_bounds(150.0, 0.0, 10.0, 100.0));
//!
//! canvas.get_mut(ball).unwrap().set_filled(true);
//! canvas.get_mut(ball).unwrap().set_color(Color::RED);
//! canvas.get_mut(ball).unwrap().move_by(135.0, 0.0);
//!
//! // The wall was added last, so it is on top
//! assert_eq!(canvas.element_at(152.0, 20.0), Some(wall.id()));
//! canvas.send_to_front(ball).unwrap();
//! assert_eq!(canvas.element_at(152.0, 20.0), Some(ball.id()));
//! ```

pub mod canvas;
pub mod compound;
pub mod config;
pub mod error;
mod geom;
pub mod object;
pub mod scene;
pub mod shapes;
pub mod sprite;
pub mod text;

pub use canvas::{GCanvas, TouchEvent, TouchKind};
pub use compound::GCompound;
pub use config::CanvasConfig;
pub use error::{GraphicsError, Result};
pub use geom::LINE_TOLERANCE;
pub use object::{
    FillState, GFillable, GObject, GResizable, GScalable, ObjectKind, ObjectState,
};
pub use scene::{Handle, ObjectId, Scene};
pub use shapes::{GArc, GImage, GLabel, GLine, GOval, GPolygon, GRect, GRoundRect, DEFAULT_ARC};
pub use sprite::{CollisionMargins, GSprite, SpriteContent, SpriteFrame};
pub use text::{ApproximateMetrics, FontMetrics, TextMetrics};

pub use gcanvas_core::{
    Color, DrawCommand, DrawContext, FillRule, ImageId, Point, RecordingContext, Rect, Size,
    TextStyle, Vec2,
};
pub use gcanvas_image::{ImageData, ImageStore};
pub use gcanvas_paint::Rasterizer;

/// ACM name for a point
pub type GPoint = Point;
/// ACM name for a width and height pair
pub type GDimension = Size;
/// ACM name for a rectangle value
pub type GRectangle = Rect;
