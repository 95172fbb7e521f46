//! Rectangles, square-cornered and rounded

use gcanvas_core::{DrawContext, FillRule, Path, Rect, Size};

use crate::object::{
    fillable_views, impl_fillable, object_plumbing, paint_path, FillState, GFillable, GObject,
    GResizable, GScalable, ObjectKind, ObjectState,
};

/// Default corner arc size for [`GRoundRect`]
pub const DEFAULT_ARC: f32 = 10.0;

/// An axis-aligned rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct GRect {
    state: ObjectState,
    fill: FillState,
    size: Size,
}

impl GRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_bounds(0.0, 0.0, width, height)
    }

    pub fn with_bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            fill: FillState::default(),
            size: Size::new(width, height),
        }
    }

    fn frame(&self) -> Rect {
        Rect::from_origin_size(self.state.location, self.size)
    }
}

impl GObject for GRect {
    object_plumbing!();
    fillable_views!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Rect
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let fill = self.is_filled().then(|| self.fill_color());
        paint_path(ctx, &Path::rect(self.frame()), &self.state, fill, FillRule::NonZero);
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        Some(self)
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl_fillable!(GRect);

impl GResizable for GRect {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
}

impl GScalable for GRect {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.size = Size::new(self.size.width * sx, self.size.height * sy);
    }
}

/// A rectangle with elliptical corners
#[derive(Clone, Debug, PartialEq)]
pub struct GRoundRect {
    state: ObjectState,
    fill: FillState,
    size: Size,
    arc_width: f32,
    arc_height: f32,
}

impl GRoundRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_bounds(0.0, 0.0, width, height)
    }

    pub fn with_bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_arcs(x, y, width, height, DEFAULT_ARC, DEFAULT_ARC)
    }

    /// `arc_width` and `arc_height` are the full size of the corner ellipse
    pub fn with_arcs(x: f32, y: f32, width: f32, height: f32, arc_width: f32, arc_height: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            fill: FillState::default(),
            size: Size::new(width, height),
            arc_width,
            arc_height,
        }
    }

    pub fn arc_width(&self) -> f32 {
        self.arc_width
    }

    pub fn arc_height(&self) -> f32 {
        self.arc_height
    }

    fn path(&self) -> Path {
        Path::rounded_rect(
            Rect::from_origin_size(self.state.location, self.size),
            self.arc_width / 2.0,
            self.arc_height / 2.0,
        )
    }

    /// Corner-aware containment: points in a rounded-off corner are outside
    fn contains_rounded(&self, x: f32, y: f32) -> bool {
        let frame = Rect::from_origin_size(self.state.location, self.size);
        if !frame.contains(gcanvas_core::Point::new(x, y)) {
            return false;
        }
        let rx = (self.arc_width / 2.0).min(frame.width() / 2.0);
        let ry = (self.arc_height / 2.0).min(frame.height() / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return true;
        }
        // Distance into the nearest corner box, if any
        let cx = if x < frame.x() + rx {
            frame.x() + rx
        } else if x > frame.right() - rx {
            frame.right() - rx
        } else {
            return true;
        };
        let cy = if y < frame.y() + ry {
            frame.y() + ry
        } else if y > frame.bottom() - ry {
            frame.bottom() - ry
        } else {
            return true;
        };
        let dx = (x - cx) / rx;
        let dy = (y - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

impl GObject for GRoundRect {
    object_plumbing!();
    fillable_views!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::RoundRect
    }

    fn size(&self) -> Size {
        self.size
    }

    fn contains(&self, point: gcanvas_core::Point) -> bool {
        self.contains_rounded(point.x, point.y)
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let fill = self.is_filled().then(|| self.fill_color());
        paint_path(ctx, &self.path(), &self.state, fill, FillRule::NonZero);
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        Some(self)
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl_fillable!(GRoundRect);

impl GResizable for GRoundRect {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
}

impl GScalable for GRoundRect {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.size = Size::new(self.size.width * sx, self.size.height * sy);
        self.arc_width *= sx;
        self.arc_height *= sy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcanvas_core::{Color, DrawCommand, Point, RecordingContext};

    #[test]
    fn test_rect_bounds_and_contains() {
        let mut r = GRect::with_bounds(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.bounds(), Rect::new(10.0, 20.0, 30.0, 40.0));
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(!r.contains(Point::new(40.0, 30.0)));

        r.move_by(5.0, -5.0);
        assert_eq!(r.location(), Point::new(15.0, 15.0));
        r.scale(2.0, 0.5);
        assert_eq!(r.size(), Size::new(60.0, 20.0));
    }

    #[test]
    fn test_unfilled_rect_paints_outline_only() {
        let r = GRect::with_bounds(0.0, 0.0, 10.0, 10.0);
        let mut ctx = RecordingContext::new(Size::new(20.0, 20.0));
        r.paint(&mut ctx);
        assert_eq!(ctx.commands().len(), 1);
        assert!(matches!(ctx.commands()[0], DrawCommand::StrokePath { .. }));
    }

    #[test]
    fn test_fill_color_defaults_to_outline_color() {
        let mut r = GRect::new(10.0, 10.0);
        r.set_color(Color::BLUE);
        r.set_filled(true);
        assert_eq!(r.fill_color(), Color::BLUE);
        r.set_fill_color(Color::YELLOW);
        assert_eq!(r.fill_color(), Color::YELLOW);

        let mut ctx = RecordingContext::new(Size::new(20.0, 20.0));
        r.paint(&mut ctx);
        match &ctx.commands()[0] {
            DrawCommand::FillPath { color, .. } => assert_eq!(*color, Color::YELLOW),
            other => panic!("expected fill first, got {:?}", other),
        }
    }

    #[test]
    fn test_round_rect_corners_are_outside() {
        let r = GRoundRect::with_arcs(0.0, 0.0, 100.0, 50.0, 20.0, 20.0);
        assert!(!r.contains(Point::new(0.5, 0.5)));
        assert!(r.contains(Point::new(10.0, 1.0)));
        assert!(r.contains(Point::new(50.0, 25.0)));
        assert!(r.contains(Point::new(3.0, 3.0)));
    }
}
