//! Geometry helpers shared by the shapes

use gcanvas_core::Point;

/// How close (in pixels) a point must be to a line to count as on it
pub const LINE_TOLERANCE: f32 = 1.5;

/// Sweeps at or beyond this magnitude are treated as full turns
const FULL_TURN_THRESHOLD: f32 = 359.99;

/// Squared distance from `p` to the segment `a`-`b`
pub(crate) fn distance_squared_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let len_sq = a.distance_squared(b);
    if len_sq == 0.0 {
        return p.distance_squared(a);
    }
    let t = (((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)))
}

/// Whether `p` is within [`LINE_TOLERANCE`] of the segment `a`-`b`
pub(crate) fn near_segment(p: Point, a: Point, b: Point) -> bool {
    distance_squared_to_segment(p, a, b) <= LINE_TOLERANCE * LINE_TOLERANCE
}

/// Normalize an angle in degrees into `[0, 360)`
pub(crate) fn normalize_degrees(theta: f32) -> f32 {
    let t = theta % 360.0;
    if t < 0.0 {
        t + 360.0
    } else {
        t
    }
}

/// Clamp near-full sweeps to exactly one turn
pub(crate) fn clamp_sweep(sweep: f32) -> f32 {
    if sweep > FULL_TURN_THRESHOLD {
        360.0
    } else if sweep < -FULL_TURN_THRESHOLD {
        -360.0
    } else {
        sweep
    }
}

/// Whether `theta` lies inside the sweep that starts at `start`
pub(crate) fn angle_in_sweep(theta: f32, start: f32, sweep: f32) -> bool {
    if sweep.abs() >= 360.0 {
        return true;
    }
    if sweep >= 0.0 {
        normalize_degrees(theta - start) <= sweep
    } else {
        normalize_degrees(start - theta) <= -sweep
    }
}

/// Upper bound on tessellated points for a full turn of an arc
const MAX_STEPS_PER_TURN: usize = 4096;

/// Points along an elliptical arc centered at `center`.
///
/// Angles are degrees, counterclockwise on screen. The angular step is
/// `atan2(1, diameter)`, which keeps consecutive points under a pixel apart.
/// The start point is included only when `include_start` is set.
pub(crate) fn tessellate_arc(
    center: Point,
    rx: f32,
    ry: f32,
    start: f32,
    sweep: f32,
    include_start: bool,
) -> Vec<Point> {
    let sweep = clamp_sweep(sweep);
    let point_at = |theta: f32| {
        let r = theta.to_radians();
        Point::new(center.x + rx * r.cos(), center.y - ry * r.sin())
    };

    let diameter = (2.0 * rx).max(2.0 * ry);
    let step = 1.0_f32.atan2(diameter.max(1.0)).to_degrees();
    let max_steps = (MAX_STEPS_PER_TURN as f32 * sweep.abs() / 360.0).ceil() as usize;
    let steps = ((sweep.abs() / step).ceil() as usize).clamp(1, max_steps.max(1));
    let dt = sweep / steps as f32;

    let mut points = Vec::with_capacity(steps + 1);
    if include_start {
        points.push(point_at(start));
    }
    for i in 1..=steps {
        points.push(point_at(start + dt * i as f32));
    }
    points
}

#[cfg(test)]
pub(crate) fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_arcs_are_capped() {
        let points = tessellate_arc(Point::ZERO, 1e9, 1e9, 0.0, 360.0, true);
        assert_eq!(points.len(), MAX_STEPS_PER_TURN + 1);

        let quarter = tessellate_arc(Point::ZERO, 1e9, 1e9, 0.0, -90.0, false);
        assert_eq!(quarter.len(), MAX_STEPS_PER_TURN / 4);
        let last = quarter[quarter.len() - 1];
        assert!((last.y - 1e9).abs() < 1e3, "{:?}", last);
    }

    #[test]
    fn test_segment_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_close(distance_squared_to_segment(Point::new(5.0, 2.0), a, b), 4.0);
        assert_close(distance_squared_to_segment(Point::new(13.0, 4.0), a, b), 25.0);
        assert!(near_segment(Point::new(5.0, 1.4), a, b));
        assert!(!near_segment(Point::new(5.0, 1.6), a, b));
    }

    #[test]
    fn test_angle_in_sweep_wraps() {
        assert!(angle_in_sweep(10.0, 350.0, 30.0));
        assert!(!angle_in_sweep(30.0, 350.0, 30.0));
        assert!(angle_in_sweep(-80.0, 0.0, -90.0));
        assert!(!angle_in_sweep(80.0, 0.0, -90.0));
        assert!(angle_in_sweep(123.0, 0.0, 400.0));
    }

    #[test]
    fn test_tessellation_ends_on_sweep_end() {
        let pts = tessellate_arc(Point::ZERO, 50.0, 50.0, 0.0, 90.0, true);
        let first = pts[0];
        let last = *pts.last().unwrap();
        assert_close(first.x, 50.0);
        assert_close(first.y, 0.0);
        assert_close(last.x, 0.0);
        assert_close(last.y, -50.0);
        // Roughly one point per pixel of arc length
        assert!(pts.len() > 70 && pts.len() < 200, "{} points", pts.len());
    }

    #[test]
    fn test_full_turn_clamp() {
        assert_eq!(clamp_sweep(359.995), 360.0);
        assert_eq!(clamp_sweep(-720.0), -360.0);
        assert_eq!(clamp_sweep(45.0), 45.0);
    }
}
