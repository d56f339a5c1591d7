use std::f64::consts::TAU;

use super::*;
use crate::geom::triangle_vertices;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[allow(clippy::cast_precision_loss)]
fn ring(center: Center, radius: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = TAU * i as f64 / count as f64;
            pt(center.cx + radius * t.cos(), center.cy + radius * t.sin())
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn line(from: Point, to: Point, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            pt(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
        })
        .collect()
}

// =============================================================
// PrecisionTier
// =============================================================

#[test]
fn tier_boundaries() {
    assert_eq!(PrecisionTier::from_score(100), PrecisionTier::High);
    assert_eq!(PrecisionTier::from_score(86), PrecisionTier::High);
    assert_eq!(PrecisionTier::from_score(85), PrecisionTier::Medium);
    assert_eq!(PrecisionTier::from_score(61), PrecisionTier::Medium);
    assert_eq!(PrecisionTier::from_score(60), PrecisionTier::Low);
    assert_eq!(PrecisionTier::from_score(0), PrecisionTier::Low);
}

// =============================================================
// circle_precision
// =============================================================

#[test]
fn precision_needs_ten_points() {
    let center = Center::new(200.0, 200.0);
    assert_eq!(circle_precision(&ring(center, 100.0, 9), center, 10), None);
    assert!(circle_precision(&ring(center, 100.0, 10), center, 10).is_some());
}

#[test]
fn precision_of_perfect_circle_is_100() {
    let center = Center::new(250.0, 250.0);
    for count in [10, 37, 360] {
        assert_eq!(circle_precision(&ring(center, 100.0, count), center, 10), Some(100));
    }
}

#[test]
fn precision_drops_for_uneven_radii() {
    let center = Center::new(0.0, 0.0);
    let mut path = ring(center, 100.0, 20);
    for (i, p) in path.iter_mut().enumerate() {
        if i % 2 == 0 {
            *p = pt(p.x * 1.2, p.y * 1.2);
        }
    }
    // Radii alternate 120/100: mean 110, deviation 10.
    assert_eq!(circle_precision(&path, center, 10), Some(91));
}

#[test]
fn precision_all_points_on_center_is_none() {
    let center = Center::new(5.0, 5.0);
    let path = vec![pt(5.0, 5.0); 12];
    assert_eq!(circle_precision(&path, center, 10), None);
}

#[test]
fn precision_floor_is_zero() {
    let center = Center::new(0.0, 0.0);
    let mut path = vec![pt(0.001, 0.0); 11];
    path.push(pt(1000.0, 0.0));
    assert_eq!(circle_precision(&path, center, 10), Some(0));
}

// =============================================================
// straightness
// =============================================================

#[test]
fn straight_edge_scores_100() {
    let edge = line(pt(0.0, 0.0), pt(300.0, 0.0), 50);
    assert_eq!(straightness(&edge, 5.0), 100);
}

#[test]
fn straightness_measures_against_own_endpoints() {
    // Endpoints far from any ideal vertex still give a perfect score.
    let edge = line(pt(13.0, 7.0), pt(91.0, 160.0), 25);
    assert_eq!(straightness(&edge, 5.0), 100);
}

#[test]
fn straightness_penalizes_mean_deviation() {
    // Middle points 4px off the chord: mean deviation 4·3/5 = 2.4 → 88.
    let edge = vec![pt(0.0, 0.0), pt(25.0, 4.0), pt(50.0, 4.0), pt(75.0, 4.0), pt(100.0, 0.0)];
    assert_eq!(straightness(&edge, 5.0), 88);
}

#[test]
fn straightness_floor_is_zero() {
    let edge = vec![pt(0.0, 0.0), pt(50.0, 200.0), pt(100.0, 0.0)];
    assert_eq!(straightness(&edge, 5.0), 0);
}

#[test]
fn straightness_short_edge_is_zero() {
    assert_eq!(straightness(&[], 5.0), 0);
    assert_eq!(straightness(&[pt(1.0, 1.0)], 5.0), 0);
}

// =============================================================
// corner_score
// =============================================================

#[test]
fn corner_within_tolerance_is_full_credit() {
    let ideal = 60.0_f64.to_radians();
    assert_eq!(corner_score(ideal, ideal), 100);
    assert_eq!(corner_score(64.0_f64.to_radians(), ideal), 100);
    assert_eq!(corner_score(55.5_f64.to_radians(), ideal), 100);
}

#[test]
fn corner_beyond_tolerance_loses_three_per_degree() {
    let ideal = 60.0_f64.to_radians();
    assert_eq!(corner_score(75.0_f64.to_radians(), ideal), 70);
    assert_eq!(corner_score(30.0_f64.to_radians(), ideal), 25);
    assert_eq!(corner_score(150.0_f64.to_radians(), ideal), 0);
}

// =============================================================
// triangle_score
// =============================================================

fn ideal_edges() -> Vec<Vec<Point>> {
    let [a, b, c] = triangle_vertices(250.0, 250.0, 300.0);
    vec![line(a, b, 40), line(b, c, 40), line(c, a, 40)]
}

#[test]
fn ideal_triangle_scores_100() {
    assert_eq!(triangle_score(&ideal_edges(), &TriangleConfig::default()), 100);
}

#[test]
fn ideal_triangle_scores_100_with_angle_term() {
    let cfg = TriangleConfig { angle_weight: 0.4, ..TriangleConfig::default() };
    assert_eq!(triangle_score(&ideal_edges(), &cfg), 100);
}

#[test]
fn missing_edge_counts_as_zero() {
    let mut edges = ideal_edges();
    edges.pop();
    assert_eq!(triangle_score(&edges, &TriangleConfig::default()), 67);
}

#[test]
fn angle_term_pulls_down_a_skewed_triangle() {
    // Straight edges, but a right triangle instead of an equilateral one.
    let a = pt(0.0, 0.0);
    let b = pt(300.0, 0.0);
    let c = pt(0.0, 300.0);
    let edges = vec![line(a, b, 30), line(b, c, 30), line(c, a, 30)];

    assert_eq!(triangle_score(&edges, &TriangleConfig::default()), 100);

    let weighted = TriangleConfig { angle_weight: 0.4, ..TriangleConfig::default() };
    // Corners 45°, 45°, 90°: scores 70, 70, 25 → mean 55 → 0.6·100 + 0.4·55 = 82.
    assert_eq!(triangle_score(&edges, &weighted), 82);
}
