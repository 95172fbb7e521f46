//! Concrete shapes

mod arc;
mod image;
mod label;
mod line;
mod oval;
mod polygon;
mod rect;

pub use arc::GArc;
pub use image::GImage;
pub use label::GLabel;
pub use line::GLine;
pub use oval::GOval;
pub use polygon::GPolygon;
pub use rect::{GRect, GRoundRect, DEFAULT_ARC};
