//! Synthetic traces for exercising the engines without a pointer.

#[cfg(test)]
#[path = "synth_test.rs"]
mod synth_test;

use std::f64::consts::TAU;

use freehand::geom::{Point, triangle_vertices};
use freehand::{GameConfig, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::trace::TraceEvent;

/// Extra fraction of a turn drawn past the start, so the stop rules get a
/// chance to fire before release.
const OVERRUN: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    #[error("surface must be positive and finite, got {width}x{height}")]
    Surface { width: f64, height: f64 },
    #[error("{shape} size must be positive and finite, got {size}")]
    Size { shape: Shape, size: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct SynthParams {
    pub shape: Shape,
    pub width: f64,
    pub height: f64,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Samples per full circle or per whole triangle.
    pub samples: usize,
    /// Maximum jitter in pixels, applied radially for a circle and across
    /// the edge for a triangle.
    pub noise: f64,
    pub seed: u64,
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Build a resize, a press, the strokes and a release.
pub fn synthesize(params: &SynthParams, config: &GameConfig) -> Result<Vec<TraceEvent>, SynthError> {
    if !positive(params.width) || !positive(params.height) {
        return Err(SynthError::Surface { width: params.width, height: params.height });
    }
    let size = match params.shape {
        Shape::Circle => params.radius,
        Shape::Triangle => config.triangle.side_for_width(params.width),
    };
    if !positive(size) {
        return Err(SynthError::Size { shape: params.shape, size });
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let points = match params.shape {
        Shape::Circle => circle_points(params, &mut rng),
        Shape::Triangle => triangle_points(params, size, &mut rng),
    };

    let mut events = Vec::with_capacity(points.len() + 2);
    events.push(TraceEvent::Resize { width: params.width, height: params.height });
    let mut points = points.into_iter();
    if let Some(first) = points.next() {
        events.push(TraceEvent::Down { x: first.x, y: first.y });
        events.extend(points.map(|p| TraceEvent::Move { x: p.x, y: p.y, pressed: true }));
        events.push(TraceEvent::Up);
    }
    Ok(events)
}

fn jitter(rng: &mut StdRng, noise: f64) -> f64 {
    if noise > 0.0 { rng.random_range(-noise..=noise) } else { 0.0 }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn circle_points(params: &SynthParams, rng: &mut StdRng) -> Vec<Point> {
    let (cx, cy) = (params.width / 2.0, params.height / 2.0);
    let samples = params.samples.max(1);
    let total = samples + (samples as f64 * OVERRUN).ceil() as usize;
    (0..=total)
        .map(|i| {
            let theta = TAU * i as f64 / samples as f64;
            let r = params.radius + jitter(rng, params.noise);
            Point::new(cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn triangle_points(params: &SynthParams, side: f64, rng: &mut StdRng) -> Vec<Point> {
    let [a, b, c] = triangle_vertices(params.width / 2.0, params.height / 2.0, side);
    let per_edge = (params.samples / 3).max(1);

    let mut points = vec![a];
    for (from, to) in [(a, b), (b, c), (c, a)] {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let len = dx.hypot(dy);
        let (nx, ny) = (-dy / len, dx / len);
        for k in 1..=per_edge {
            let t = k as f64 / per_edge as f64;
            // Corners stay exact so the trace always reaches each vertex.
            let off = if k == per_edge { 0.0 } else { jitter(rng, params.noise) };
            points.push(Point::new(from.x + dx * t + nx * off, from.y + dy * t + ny * off));
        }
    }
    points
}
