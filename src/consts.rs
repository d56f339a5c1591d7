//! Shared numeric constants for the tracing engines.
//!
//! These are the defaults behind [`crate::config::CircleConfig`] and
//! [`crate::config::TriangleConfig`]. Distances are in surface pixels, angles
//! in radians unless the name says otherwise.

// ── Circle: input filtering ─────────────────────────────────────

/// Minimum distance from the center for a point to be accepted.
pub const PROXIMITY_THRESHOLD: f64 = 50.0;

/// Minimum spacing between consecutive accepted points.
pub const MIN_DISTANCE_THRESHOLD: f64 = 4.0;

// ── Circle: stop detection ──────────────────────────────────────

/// Path length that must be exceeded before the axis stop is considered.
pub const MIN_POINTS_TO_STOP: usize = 50;

/// Angular tolerance for "returned to the start angle".
pub const AXIS_STOP_THRESHOLD: f64 = 0.05;

/// Path length that must be exceeded before the traversal direction commits.
pub const DIRECTION_SETTLE_POINTS: usize = 10;

/// Per-sample reverse sweep tolerated before the stroke counts as backtracking.
pub const BACKTRACK_TOLERANCE: f64 = 0.05;

/// An earlier point closer than this to the current one is a self-overlap.
pub const OVERLAP_THRESHOLD: f64 = 8.0;

/// Most recent points excluded from the self-overlap scan.
pub const OVERLAP_SKIP_POINTS: usize = 10;

/// The closing point snaps onto the start point inside this distance.
pub const LOOP_SNAP_DISTANCE: f64 = 5.0;

// ── Circle: release classification ──────────────────────────────

/// Release closer than this to the start point is a success.
pub const SUCCESS_DISTANCE: f64 = 20.0;

/// Release inside this distance of the start point is the final approach.
///
/// A successful release also appends the start point so the loop renders
/// closed, and the backtrack and overlap checks are suspended in this zone.
pub const CLOSURE_DISTANCE: f64 = 55.0;

/// Release within this angle of the start angle is a success.
pub const SUCCESS_ANGLE: f64 = 0.15;

/// Release within this angle of the start angle is "so close".
pub const CLOSE_ANGLE: f64 = 0.3;

/// Accumulated sweep required before a release can succeed (half a turn).
pub const MIN_SWEEP: f64 = std::f64::consts::PI;

// ── Scoring ─────────────────────────────────────────────────────

/// Fewest path points that yield a circle precision score.
pub const MIN_PRECISION_POINTS: usize = 10;

/// Straightness points lost per pixel of mean deviation.
pub const STRAIGHTNESS_PENALTY: f64 = 5.0;

/// Ideal interior angle of an equilateral triangle, in degrees.
pub const IDEAL_CORNER_DEG: f64 = 60.0;

/// Corner error in degrees that still earns full credit.
pub const ANGLE_TOLERANCE_DEG: f64 = 5.0;

/// Corner points lost per degree beyond the tolerance.
pub const ANGLE_PENALTY_PER_DEG: f64 = 3.0;

/// Scores above this are shown as high precision.
pub const HIGH_PRECISION: u8 = 85;

/// Scores above this are shown as medium precision.
pub const MEDIUM_PRECISION: u8 = 60;

// ── Triangle ────────────────────────────────────────────────────

/// Nominal side length of the target triangle.
pub const TRIANGLE_SIZE: f64 = 300.0;

/// Cap on the side length as a fraction of the surface width.
pub const SIDE_FRACTION: f64 = 0.8;

/// A point closer than this to a vertex snaps onto it.
pub const SNAP_DISTANCE: f64 = 20.0;

/// Release closer than this to the start vertex closes the triangle.
pub const CLOSE_DISTANCE: f64 = 20.0;
