//! Elliptical arcs and pie wedges

use gcanvas_core::{DrawContext, FillRule, Path, Point, Rect, Size};

use crate::geom::{angle_in_sweep, near_segment, tessellate_arc};
use crate::object::{
    fillable_views, impl_fillable, object_plumbing, paint_path, FillState, GFillable, GObject,
    GResizable, GScalable, ObjectKind, ObjectState,
};

/// An arc of the ellipse inscribed in a frame rectangle.
///
/// Angles are in degrees, measured counterclockwise from the positive x
/// axis. An unfilled arc is just the curve; a filled arc is the pie wedge
/// bounded by the curve and the two radii.
#[derive(Clone, Debug, PartialEq)]
pub struct GArc {
    state: ObjectState,
    fill: FillState,
    frame: Size,
    start: f32,
    sweep: f32,
}

impl GArc {
    pub fn new(width: f32, height: f32, start: f32, sweep: f32) -> Self {
        Self::with_bounds(0.0, 0.0, width, height, start, sweep)
    }

    pub fn with_bounds(x: f32, y: f32, width: f32, height: f32, start: f32, sweep: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            fill: FillState::default(),
            frame: Size::new(width, height),
            start,
            sweep,
        }
    }

    pub fn start_angle(&self) -> f32 {
        self.start
    }

    pub fn set_start_angle(&mut self, start: f32) {
        self.start = start;
    }

    pub fn sweep_angle(&self) -> f32 {
        self.sweep
    }

    pub fn set_sweep_angle(&mut self, sweep: f32) {
        self.sweep = sweep;
    }

    /// The frame rectangle of the full ellipse
    pub fn frame_rect(&self) -> Rect {
        Rect::from_origin_size(self.state.location, self.frame)
    }

    fn center(&self) -> Point {
        self.frame_rect().center()
    }

    /// Points along the curve, in parent coordinates
    pub fn arc_points(&self) -> Vec<Point> {
        tessellate_arc(
            self.center(),
            self.frame.width / 2.0,
            self.frame.height / 2.0,
            self.start,
            self.sweep,
            true,
        )
    }

    pub fn start_point(&self) -> Point {
        self.arc_points()[0]
    }

    pub fn end_point(&self) -> Point {
        let points = self.arc_points();
        points[points.len() - 1]
    }

    fn outline(&self) -> Path {
        let mut points = self.arc_points();
        if self.is_filled() {
            points.insert(0, self.center());
            Path::polygon(&points, true)
        } else {
            Path::polygon(&points, false)
        }
    }

    fn wedge_contains(&self, point: Point) -> bool {
        let rx = self.frame.width / 2.0;
        let ry = self.frame.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let center = self.center();
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        if dx * dx + dy * dy > 1.0 {
            return false;
        }
        let theta = (-dy).atan2(dx).to_degrees();
        angle_in_sweep(theta, self.start, self.sweep)
    }
}

impl GObject for GArc {
    object_plumbing!();
    fillable_views!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Arc
    }

    fn size(&self) -> Size {
        self.bounds().size
    }

    /// Tight box of the visible curve, plus the center for wedges
    fn bounds(&self) -> Rect {
        let mut points = self.arc_points();
        if self.is_filled() {
            points.push(self.center());
        }
        Rect::bounding(points).unwrap_or(Rect::from_origin_size(self.state.location, Size::ZERO))
    }

    fn contains(&self, point: Point) -> bool {
        if self.is_filled() {
            return self.wedge_contains(point);
        }
        self.arc_points()
            .windows(2)
            .any(|seg| near_segment(point, seg[0], seg[1]))
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        let fill = self.is_filled().then(|| self.fill_color());
        paint_path(ctx, &self.outline(), &self.state, fill, FillRule::NonZero);
    }

    fn as_resizable_mut(&mut self) -> Option<&mut dyn GResizable> {
        Some(self)
    }

    fn as_scalable_mut(&mut self) -> Option<&mut dyn GScalable> {
        Some(self)
    }
}

impl_fillable!(GArc);

impl GResizable for GArc {
    /// Sets the size of the frame rectangle
    fn set_size(&mut self, width: f32, height: f32) {
        self.frame = Size::new(width, height);
    }
}

impl GScalable for GArc {
    fn scale(&mut self, sx: f32, sy: f32) {
        self.frame = Size::new(self.frame.width * sx, self.frame.height * sy);
    }
}
