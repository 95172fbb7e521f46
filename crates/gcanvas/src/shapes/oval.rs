//! Ovals inscribed in a frame rectangle

use gcanvas_core::{DrawContext, FillRule, Path, Point, Rect, Size};

use crate::object::{
    fillable_views, impl_fillable, object_plumbing, paint_path, FillState, GFillable, GObject,
    GResizable, GScalable, ObjectKind, ObjectState,
};

/// An ellipse inscribed in its bounding rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct GOval {
    state: ObjectState,
    fill: FillState,
    size: Size,
}

impl GOval {
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

    /// A circle of radius `r` centered on `(cx, cy)`
    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::with_bounds(cx - r, cy - r, 2.0 * r, 2.0 * r)
    }
}

impl GObject for GOval {
    object_plumbing!();
    fillable_views!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Oval
    }

    fn size(&self) -> Size {
        self.size
    }

    fn contains(&self, point: Point) -> bool {
        let rx = self.size.width / 2.0;
        let ry = self.size.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let center = self.bounds().center();
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let frame = Rect::from_origin_size(self.state.location, self.size);
        let fill = self.is_filled().then(|| self.fill_color());
        paint_path(ctx, &Path::ellipse(frame), &self.state, fill, FillRule::NonZero);
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        Some(self)
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl_fillable!(GOval);

impl GResizable for GOval {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
}

impl GScalable for GOval {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.size = Size::new(self.size.width * sx, self.size.height * sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_uses_ellipse_equation() {
        let oval = GOval::with_bounds(0.0, 0.0, 100.0, 50.0);
        assert!(oval.contains(Point::new(50.0, 25.0)));
        assert!(oval.contains(Point::new(99.0, 25.0)));
        // Inside the frame but outside the ellipse
        assert!(!oval.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_degenerate_oval_contains_nothing() {
        let oval = GOval::with_bounds(0.0, 0.0, 0.0, 50.0);
        assert!(!oval.contains(Point::new(0.0, 25.0)));
    }

    #[test]
    fn test_circle_constructor() {
        let c = GOval::circle(50.0, 50.0, 10.0);
        assert_eq!(c.bounds(), Rect::new(40.0, 40.0, 20.0, 20.0));
        assert!(c.contains(Point::new(50.0, 59.0)));
    }
}
