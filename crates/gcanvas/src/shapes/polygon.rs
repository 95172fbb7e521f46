//! Polygons built vertex by vertex

use gcanvas_core::{DrawContext, FillRule, Path, Point, Rect, Size, Vec2};

use crate::error::{GraphicsError, Result};
use crate::geom::tessellate_arc;
use crate::object::{
    fillable_views, impl_fillable, object_plumbing, paint_path, FillState, GFillable, GObject,
    GScalable, ObjectKind, ObjectState,
};

/// A closed polygon whose vertices are stored relative to its location.
///
/// Build it with [`add_vertex`](Self::add_vertex), then extend it with
/// relative edges or arcs. Once [`mark_as_complete`](Self::mark_as_complete)
/// is called the vertex list is frozen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GPolygon {
    state: ObjectState,
    fill: FillState,
    vertices: Vec<Point>,
    complete: bool,
}

impl GPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty polygon with its reference point at `(x, y)`
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            ..Default::default()
        }
    }

    /// A polygon from vertices relative to the reference point
    pub fn from_vertices(x: f32, y: f32, vertices: impl IntoIterator<Item = Point>) -> Self {
        Self {
            state: ObjectState::at(x, y),
            vertices: vertices.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn mark_as_complete(&mut self) {
        self.complete = true;
    }

    fn check_open(&self) -> Result<()> {
        if self.complete {
            return Err(GraphicsError::PolygonComplete);
        }
        Ok(())
    }

    fn last_vertex(&self) -> Result<Point> {
        self.vertices
            .last()
            .copied()
            .ok_or(GraphicsError::EmptyPolygon)
    }

    /// Add a vertex relative to the reference point
    pub fn add_vertex(&mut self, x: f32, y: f32) -> Result<()> {
        self.check_open()?;
        self.vertices.push(Point::new(x, y));
        Ok(())
    }

    /// Add a vertex offset from the last one
    pub fn add_edge(&mut self, dx: f32, dy: f32) -> Result<()> {
        self.check_open()?;
        let last = self.last_vertex()?;
        self.vertices.push(last.offset(dx, dy));
        Ok(())
    }

    /// Add an edge of length `r` in direction `theta` degrees
    pub fn add_polar_edge(&mut self, r: f32, theta_degrees: f32) -> Result<()> {
        let v = Vec2::from_polar(r, theta_degrees);
        self.add_edge(v.x, v.y)
    }

    /// Add vertices along an elliptical arc that begins at the last vertex.
    ///
    /// `width` and `height` size the ellipse the arc belongs to; `start` is
    /// the angle at which the last vertex sits on that ellipse.
    pub fn add_arc(&mut self, width: f32, height: f32, start: f32, sweep: f32) -> Result<()> {
        self.check_open()?;
        let last = self.last_vertex()?;
        let rx = width / 2.0;
        let ry = height / 2.0;
        let r = start.to_radians();
        let center = Point::new(last.x - rx * r.cos(), last.y + ry * r.sin());
        self.vertices
            .extend(tessellate_arc(center, rx, ry, start, sweep, false));
        Ok(())
    }

    /// The last vertex in parent coordinates
    pub fn current_point(&self) -> Option<Point> {
        self.vertices
            .last()
            .map(|v| self.state.location.offset(v.x, v.y))
    }

    /// Rotate the vertices `theta` degrees counterclockwise about the
    /// reference point
    pub fn rotate(&mut self, theta_degrees: f32) {
        let (sin, cos) = theta_degrees.to_radians().sin_cos();
        for v in &mut self.vertices {
            *v = Point::new(cos * v.x + sin * v.y, cos * v.y - sin * v.x);
        }
    }

    /// Polygon center: the middle of its bounding box
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    fn outline(&self) -> Path {
        let points: Vec<Point> = self
            .vertices
            .iter()
            .map(|v| self.state.location.offset(v.x, v.y))
            .collect();
        Path::polygon(&points, true)
    }

    /// Even-odd crossing test on local coordinates
    fn contains_local(&self, x: f32, y: f32) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut prev = self.vertices[n - 1];
        for &v in &self.vertices {
            let crosses = (prev.y < y && v.y >= y) || (v.y < y && prev.y >= y);
            if crosses && prev.x + (y - prev.y) / (v.y - prev.y) * (v.x - prev.x) < x {
                inside = !inside;
            }
            prev = v;
        }
        inside
    }
}

impl GObject for GPolygon {
    object_plumbing!();
    fillable_views!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Polygon
    }

    fn size(&self) -> Size {
        self.bounds().size
    }

    fn bounds(&self) -> Rect {
        let loc = self.state.location;
        Rect::bounding(self.vertices.iter().map(|v| loc.offset(v.x, v.y)))
            .unwrap_or(Rect::from_origin_size(loc, Size::ZERO))
    }

    fn contains(&self, point: Point) -> bool {
        let loc = self.state.location;
        self.contains_local(point.x - loc.x, point.y - loc.y)
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        if self.vertices.is_empty() {
            return;
        }
        let fill = self.is_filled().then(|| self.fill_color());
        paint_path(ctx, &self.outline(), &self.state, fill, FillRule::EvenOdd);
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl_fillable!(GPolygon);

impl GScalable for GPolygon {
    /// Scale the vertices about the reference point
    fn scale(&mut self, sx: f32, sy: f32) {
        for v in &mut self.vertices {
            *v = Point::new(v.x * sx, v.y * sy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::assert_close;

    fn square() -> GPolygon {
        let mut p = GPolygon::at(100.0, 100.0);
        p.add_vertex(-10.0, -10.0).unwrap();
        p.add_edge(20.0, 0.0).unwrap();
        p.add_edge(0.0, 20.0).unwrap();
        p.add_edge(-20.0, 0.0).unwrap();
        p
    }

    #[test]
    fn test_edges_are_relative() {
        let p = square();
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.bounds(), Rect::new(90.0, 90.0, 20.0, 20.0));
        assert_eq!(p.current_point(), Some(Point::new(90.0, 110.0)));
    }

    #[test]
    fn test_even_odd_contains() {
        let p = square();
        assert!(p.contains(Point::new(100.0, 100.0)));
        assert!(!p.contains(Point::new(120.0, 100.0)));
        assert!(!p.contains(Point::new(100.0, 85.0)));
    }

    #[test]
    fn test_self_intersecting_star_has_hollow_center() {
        // Five-pointed star drawn with a single stroke
        let mut star = GPolygon::at(0.0, 0.0);
        star.add_vertex(0.0, -50.0).unwrap();
        for i in 1..5 {
            let angle = (i as f32 * 144.0 - 90.0).to_radians();
            star.add_vertex(50.0 * angle.cos(), 50.0 * angle.sin()).unwrap();
        }
        assert!(!star.contains(Point::new(0.0, 0.0)));
        assert!(star.contains(Point::new(0.0, -40.0)));
    }

    #[test]
    fn test_empty_polygon_errors() {
        let mut p = GPolygon::new();
        assert!(matches!(p.add_edge(1.0, 1.0), Err(GraphicsError::EmptyPolygon)));
        assert!(matches!(
            p.add_arc(10.0, 10.0, 0.0, 90.0),
            Err(GraphicsError::EmptyPolygon)
        ));
        assert_eq!(p.bounds(), Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(!p.contains(Point::ZERO));
    }

    #[test]
    fn test_complete_polygon_is_frozen() {
        let mut p = square();
        p.mark_as_complete();
        assert!(matches!(p.add_vertex(0.0, 0.0), Err(GraphicsError::PolygonComplete)));
        assert!(matches!(p.add_polar_edge(5.0, 0.0), Err(GraphicsError::PolygonComplete)));
        assert_eq!(p.vertex_count(), 4);
    }

    #[test]
    fn test_polar_edge_points_up_for_90_degrees() {
        let mut p = GPolygon::new();
        p.add_vertex(0.0, 0.0).unwrap();
        p.add_polar_edge(10.0, 90.0).unwrap();
        let v = p.vertices()[1];
        assert_close(v.x, 0.0);
        assert_close(v.y, -10.0);
    }

    #[test]
    fn test_arc_continues_from_last_vertex() {
        let mut p = GPolygon::new();
        p.add_vertex(10.0, 0.0).unwrap();
        p.add_arc(20.0, 20.0, 0.0, 180.0).unwrap();
        let first_arc = p.vertices()[1];
        assert!(first_arc.distance(Point::new(10.0, 0.0)) < 1.0);
        let end = *p.vertices().last().unwrap();
        assert_close(end.x, -10.0);
        assert_close(end.y, 0.0);
        // The top of the half circle is reached
        let top = p.vertices().iter().map(|v| v.y).fold(f32::MAX, f32::min);
        assert!(top < -9.9 && top >= -10.0, "top = {}", top);
    }

    #[test]
    fn test_rotate_and_scale_about_reference_point() {
        let mut p = GPolygon::at(50.0, 50.0);
        p.add_vertex(10.0, 0.0).unwrap();
        p.rotate(90.0);
        let v = p.vertices()[0];
        assert_close(v.x, 0.0);
        assert_close(v.y, -10.0);

        p.scale(1.0, 3.0);
        assert_close(p.vertices()[0].y, -30.0);
        assert_eq!(p.location(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_fills_with_even_odd_rule() {
        use gcanvas_core::{DrawCommand, RecordingContext};

        let mut p = square();
        p.set_filled(true);
        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        p.paint(&mut ctx);
        assert!(matches!(
            ctx.commands()[0],
            DrawCommand::FillPath {
                rule: FillRule::EvenOdd,
                ..
            }
        ));
    }
}
