//! Straight line segments

use gcanvas_core::{DrawContext, Path, Point, Rect, Size, Vec2};

use crate::geom::near_segment;
use crate::object::{object_plumbing, GObject, GScalable, ObjectKind, ObjectState};

/// A line segment. The location is the start point; the end point is kept
/// as an offset so moving the line moves both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct GLine {
    state: ObjectState,
    delta: Vec2,
}

impl GLine {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            state: ObjectState::at(x0, y0),
            delta: Vec2::new(x1 - x0, y1 - y0),
        }
    }

    pub fn start_point(&self) -> Point {
        self.state.location
    }

    pub fn end_point(&self) -> Point {
        self.state.location + self.delta
    }

    /// Move the start point, keeping the end point where it is
    pub fn set_start_point(&mut self, x: f32, y: f32) {
        let end = self.end_point();
        self.state.location = Point::new(x, y);
        self.delta = Vec2::new(end.x - x, end.y - y);
    }

    /// Move the end point, keeping the start point where it is
    pub fn set_end_point(&mut self, x: f32, y: f32) {
        let start = self.start_point();
        self.delta = Vec2::new(x - start.x, y - start.y);
    }

    pub fn length(&self) -> f32 {
        self.delta.length()
    }
}

impl GObject for GLine {
    object_plumbing!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Line
    }

    fn size(&self) -> Size {
        Size::new(self.delta.x.abs(), self.delta.y.abs())
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start_point(), self.end_point())
    }

    /// True within the line tolerance of the segment
    fn contains(&self, point: Point) -> bool {
        near_segment(point, self.start_point(), self.end_point())
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let path = Path::line(self.start_point(), self.end_point());
        ctx.stroke_path(&path, &self.stroke(), self.state.color);
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl GScalable for GLine {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.delta = Vec2::new(self.delta.x * sx, self.delta.y * sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_normalized() {
        let line = GLine::new(50.0, 10.0, 20.0, 40.0);
        assert_eq!(line.bounds(), Rect::new(20.0, 10.0, 30.0, 30.0));
        assert_eq!(line.size(), Size::new(30.0, 30.0));
    }

    #[test]
    fn test_contains_within_tolerance() {
        let line = GLine::new(0.0, 0.0, 100.0, 0.0);
        assert!(line.contains(Point::new(50.0, 1.0)));
        assert!(line.contains(Point::new(-1.0, 0.0)));
        assert!(!line.contains(Point::new(50.0, 2.0)));
        assert!(!line.contains(Point::new(102.0, 0.0)));
    }

    #[test]
    fn test_endpoint_setters() {
        let mut line = GLine::new(0.0, 0.0, 10.0, 10.0);
        line.set_start_point(5.0, 0.0);
        assert_eq!(line.end_point(), Point::new(10.0, 10.0));
        line.set_end_point(5.0, 20.0);
        assert_eq!(line.start_point(), Point::new(5.0, 0.0));
        assert_eq!(line.length(), 20.0);

        line.move_by(1.0, 1.0);
        assert_eq!(line.end_point(), Point::new(6.0, 21.0));
    }

    #[test]
    fn test_scale_keeps_start() {
        let mut line = GLine::new(10.0, 10.0, 20.0, 30.0);
        line.scale(2.0, 0.5);
        assert_eq!(line.start_point(), Point::new(10.0, 10.0));
        assert_eq!(line.end_point(), Point::new(30.0, 20.0));
    }
}
