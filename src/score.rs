//! Scoring: circle precision, edge straightness, and corner angles.
//!
//! Scores are whole percentages in `0..=100`. A score that cannot be computed
//! from the given points is `None`, never a NaN.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use serde::{Deserialize, Serialize};

use crate::config::TriangleConfig;
use crate::consts::{ANGLE_PENALTY_PER_DEG, ANGLE_TOLERANCE_DEG, HIGH_PRECISION, IDEAL_CORNER_DEG, MEDIUM_PRECISION};
use crate::geom::{Center, Point, distance, law_of_cosines_angle, point_to_segment_distance};

/// Number of sides scored for a triangle attempt.
const SIDES: usize = 3;

/// How a score is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionTier {
    High,
    Medium,
    Low,
}

impl PrecisionTier {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_PRECISION {
            Self::High
        } else if score > MEDIUM_PRECISION {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Round a percentage into `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

/// Radial-uniformity score of a traced circle.
///
/// `100 · (1 − σ / r̄)` over the radii of every point, where `σ` is the
/// standard deviation of the radii about their mean `r̄`. `None` below
/// `min_points` or when every point sits on the center.
#[must_use]
pub fn circle_precision(path: &[Point], center: Center, min_points: usize) -> Option<u8> {
    if path.len() < min_points.max(1) {
        return None;
    }
    let origin = center.as_point();
    let radii: Vec<f64> = path.iter().map(|p| distance(*p, origin)).collect();
    let mean_radius = mean(radii.iter().copied());
    if mean_radius <= f64::EPSILON {
        return None;
    }
    let variance = mean(radii.iter().map(|r| (r - mean_radius).powi(2)));
    let normalized = (1.0 - variance.sqrt() / mean_radius).max(0.0);
    Some(to_score(normalized * 100.0))
}

/// Straightness of one traced edge against the chord between its own endpoints.
///
/// Loses `penalty` points per pixel of mean perpendicular deviation. Edges
/// with fewer than two points score 0.
#[must_use]
pub fn straightness(edge: &[Point], penalty: f64) -> u8 {
    let (Some(&start), Some(&end)) = (edge.first(), edge.last()) else {
        return 0;
    };
    if edge.len() < 2 {
        return 0;
    }
    let deviation = mean(edge.iter().map(|p| point_to_segment_distance(*p, start, end)));
    to_score(100.0 - deviation * penalty)
}

/// Score of a traced corner angle against an ideal angle, both in radians.
#[must_use]
pub fn corner_score(drawn: f64, ideal: f64) -> u8 {
    let error = (drawn.to_degrees() - ideal.to_degrees()).abs();
    if error <= ANGLE_TOLERANCE_DEG {
        return 100;
    }
    to_score(100.0 - (error - ANGLE_TOLERANCE_DEG) * ANGLE_PENALTY_PER_DEG)
}

/// Corner scores at the end of each edge, where it meets the next one.
fn corner_scores(edges: &[Vec<Point>]) -> Vec<u8> {
    let ideal = IDEAL_CORNER_DEG.to_radians();
    (0..SIDES)
        .map(|i| {
            let incoming = edges.get(i);
            let outgoing = edges.get((i + 1) % SIDES);
            match (incoming, outgoing) {
                (Some(inc), Some(out)) => match (inc.first(), inc.last(), out.last()) {
                    (Some(&from), Some(&corner), Some(&to)) => {
                        corner_score(law_of_cosines_angle(from, corner, to), ideal)
                    }
                    _ => 0,
                },
                _ => 0,
            }
        })
        .collect()
}

/// Final score of a closed triangle from its traced edges.
///
/// The mean straightness of the three edges; missing edges count as 0. When
/// `angle_weight` is positive the mean corner score is blended in with that
/// weight.
#[must_use]
pub fn triangle_score(edges: &[Vec<Point>], config: &TriangleConfig) -> u8 {
    let straight = mean(
        (0..SIDES).map(|i| edges.get(i).map_or(0.0, |e| f64::from(straightness(e, config.straightness_penalty)))),
    );
    if config.angle_weight <= 0.0 {
        return to_score(straight);
    }
    let angles = mean(corner_scores(edges).into_iter().map(f64::from));
    to_score((1.0 - config.angle_weight) * straight + config.angle_weight * angles)
}
