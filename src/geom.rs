//! Geometry kernel: points, the surface center, and pure 2D math.
//!
//! Every function here is total for finite inputs. Degenerate cases (zero
//! length segments, coincident points) fall back to a defined value instead
//! of producing NaN.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// A sample in surface-local coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Center {
    pub cx: f64,
    pub cy: f64,
}

impl Center {
    #[must_use]
    pub fn new(cx: f64, cy: f64) -> Self {
        Self { cx, cy }
    }

    /// The center of a `width` x `height` surface.
    #[must_use]
    pub fn of_surface(width: f64, height: f64) -> Self {
        Self { cx: width / 2.0, cy: height / 2.0 }
    }

    #[must_use]
    pub fn as_point(self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Polar angle of `p` around `center`, in `(-π, π]`.
#[must_use]
pub fn angle(p: Point, center: Center) -> f64 {
    (p.y - center.cy).atan2(p.x - center.cx)
}

/// Absolute shortest-arc difference between two angles, in `[0, π]`.
#[must_use]
pub fn angle_diff(a1: f64, a2: f64) -> f64 {
    let diff = (a1 - a2).abs().rem_euclid(TAU);
    if diff > PI { TAU - diff } else { diff }
}

/// Signed shortest-arc step from `from` to `to`, in `(-π, π]`.
///
/// Positive values are clockwise on a y-down surface.
#[must_use]
pub fn signed_angle_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI { delta - TAU } else { delta }
}

/// Distance from `p` to the closed segment `[v1, v2]`.
#[must_use]
pub fn point_to_segment_distance(p: Point, v1: Point, v2: Point) -> f64 {
    let dx = v2.x - v1.x;
    let dy = v2.y - v1.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, v1);
    }
    let t = (((p.x - v1.x) * dx + (p.y - v1.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(v1.x + t * dx, v1.y + t * dy))
}

/// Vertices of an equilateral triangle centered on `(cx, cy)`.
///
/// The apex sits straight above the centroid at two thirds of the height; the
/// base corners sit one third of the height below it, right corner first.
#[must_use]
pub fn triangle_vertices(cx: f64, cy: f64, side_length: f64) -> [Point; 3] {
    let height = (3.0_f64.sqrt() / 2.0) * side_length;
    [
        Point::new(cx, cy - (2.0 / 3.0) * height),
        Point::new(cx + side_length / 2.0, cy + height / 3.0),
        Point::new(cx - side_length / 2.0, cy + height / 3.0),
    ]
}

/// Interior angle at `p2` formed by `p1` and `p3`, in radians.
///
/// Returns 0 when either arm has zero length.
#[must_use]
pub fn law_of_cosines_angle(p1: Point, p2: Point, p3: Point) -> f64 {
    let a = distance(p2, p3);
    let b = distance(p1, p3);
    let c = distance(p1, p2);
    if a == 0.0 || c == 0.0 {
        return 0.0;
    }
    let cos = (a * a + c * c - b * b) / (2.0 * a * c);
    cos.clamp(-1.0, 1.0).acos()
}
