//! The GObject abstraction
//!
//! Every drawable shape implements [`GObject`]: it has a location, a color,
//! a visibility flag and a line width (all kept in [`ObjectState`]), reports
//! its size and bounds in its parent's coordinate space, answers point
//! containment, and paints itself through a [`DrawContext`].
//!
//! Optional capabilities are separate traits reachable through the `as_*`
//! views, so code holding a `dyn GObject` can ask whether the object can be
//! filled, resized or scaled.

use std::any::Any;
use std::fmt;

use gcanvas_core::{Color, DrawContext, FillRule, Path, Point, Rect, Size, Stroke, Vec2};

/// State shared by every object
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectState {
    /// Reference point in parent coordinates. Its meaning depends on the
    /// shape: top-left corner for rects, start point for lines, baseline
    /// origin for labels.
    pub location: Point,
    pub color: Color,
    pub visible: bool,
    pub line_width: f32,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            location: Point::ZERO,
            color: Color::BLACK,
            visible: true,
            line_width: 1.0,
        }
    }
}

impl ObjectState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            location: Point::new(x, y),
            ..Default::default()
        }
    }
}

/// Fill settings for shapes with an interior
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillState {
    pub filled: bool,
    /// Explicit fill color; the outline color is used when unset
    pub color: Option<Color>,
}

/// Concrete kind of an object, for logging and inspection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Rect,
    RoundRect,
    Oval,
    Line,
    Arc,
    Polygon,
    Image,
    Label,
    Compound,
    Sprite,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Rect => "GRect",
            ObjectKind::RoundRect => "GRoundRect",
            ObjectKind::Oval => "GOval",
            ObjectKind::Line => "GLine",
            ObjectKind::Arc => "GArc",
            ObjectKind::Polygon => "GPolygon",
            ObjectKind::Image => "GImage",
            ObjectKind::Label => "GLabel",
            ObjectKind::Compound => "GCompound",
            ObjectKind::Sprite => "GSprite",
        };
        f.write_str(name)
    }
}

/// A drawable shape
pub trait GObject: Any + fmt::Debug {
    fn state(&self) -> &ObjectState;

    fn state_mut(&mut self) -> &mut ObjectState;

    fn kind(&self) -> ObjectKind;

    /// Width and height of the object
    fn size(&self) -> Size;

    /// Bounding box in parent coordinates
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.location(), self.size())
    }

    /// Whether `point` (parent coordinates) lies inside the object
    fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Paint the object in parent coordinates
    fn paint(&self, ctx: &mut dyn DrawContext);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_fillable(&self) -> Option<&dyn GFillable> {
        None
    }

    fn as_fillable_mut(&mut self) -> Option<&mut dyn GFillable> {
        None
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        None
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        None
    }

    fn location(&self) -> Point {
        self.state().location
    }

    fn x(&self) -> f32 {
        self.state().location.x
    }

    fn y(&self) -> f32 {
        self.state().location.y
    }

    fn width(&self) -> f32 {
        self.size().width
    }

    fn height(&self) -> f32 {
        self.size().height
    }

    fn set_location(&mut self, x: f32, y: f32) {
        self.state_mut().location = Point::new(x, y);
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        let loc = self.state().location;
        self.state_mut().location = loc.offset(dx, dy);
    }

    /// Move `r` pixels in direction `theta` degrees (counterclockwise on
    /// screen, 0 pointing right)
    fn move_polar(&mut self, r: f32, theta_degrees: f32) {
        let v = Vec2::from_polar(r, theta_degrees);
        self.move_by(v.x, v.y);
    }

    fn color(&self) -> Color {
        self.state().color
    }

    fn set_color(&mut self, color: Color) {
        self.state_mut().color = color;
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    fn line_width(&self) -> f32 {
        self.state().line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.state_mut().line_width = width.max(0.0);
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.state().line_width)
    }
}

/// Shapes with an interior that can be filled
pub trait GFillable: GObject {
    fn fill_state(&self) -> &FillState;

    fn fill_state_mut(&mut self) -> &mut FillState;

    fn is_filled(&self) -> bool {
        self.fill_state().filled
    }

    fn set_filled(&mut self, filled: bool) {
        self.fill_state_mut().filled = filled;
    }

    /// Fill color, falling back to the outline color
    fn fill_color(&self) -> Color {
        self.fill_state().color.unwrap_or_else(|| self.color())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_state_mut().color = Some(color);
    }
}

/// Shapes whose width and height can be set directly
pub trait GResizable: GObject {
    fn set_size(&mut self, width: f32, height: f32);

    fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.set_location(x, y);
        self.set_size(width, height);
    }
}

/// Shapes that scale about their reference point
pub trait GScalable: GObject {
    fn scale(&mut self, sx: f32, sy: f32);

    fn scale_uniform(&mut self, factor: f32) {
        self.scale(factor, factor);
    }
}

/// Fill (when requested) then outline a path
pub(crate) fn paint_path(
    ctx: &mut dyn DrawContext,
    path: &Path,
    state: &ObjectState,
    fill: Option<Color>,
    rule: FillRule,
) {
    if let Some(color) = fill {
        ctx.fill_path(path, rule, color);
    }
    ctx.stroke_path(path, &Stroke::new(state.line_width), state.color);
}

/// `GObject` plumbing every concrete shape repeats
macro_rules! object_plumbing {
    () => {
        fn state(&self) -> &$crate::object::ObjectState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut $crate::object::ObjectState {
            &mut self.state
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

/// Capability views for shapes that implement `GFillable`
macro_rules! fillable_views {
    () => {
        fn as_fillable(&self) -> Option<&dyn $crate::object::GFillable> {
            Some(self)
        }

        fn as_fillable_mut(&mut self) -> Option<&mut dyn $crate::object::GFillable> {
            Some(self)
        }
    };
}

/// `GFillable` for a shape storing its settings in a `fill` field
macro_rules! impl_fillable {
    ($ty:ty) => {
        impl $crate::object::GFillable for $ty {
            fn fill_state(&self) -> &$crate::object::FillState {
                &self.fill
            }

            fn fill_state_mut(&mut self) -> &mut $crate::object::FillState {
                &mut self.fill
            }
        }
    };
}

pub(crate) use {fillable_views, impl_fillable, object_plumbing};
