//! Circle engine: live precision scoring and automatic stop detection.
//!
//! The user presses anywhere outside the proximity ring and traces around the
//! surface center. Every accepted sample is checked, in order, for
//! backtracking against the committed direction, for crossing the earlier
//! path, and for returning to the start angle (the axis stop). Any of these
//! ends the attempt without a release. A release classifies the attempt by how
//! close the last sample is to the start.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use serde::{Deserialize, Serialize};

use crate::config::CircleConfig;
use crate::engine::{Action, Shape, ShapeEngine, Snapshot};
use crate::geom::{Center, Point, angle, angle_diff, distance, signed_angle_delta};
use crate::score::circle_precision;
use crate::session::{Completion, GameStatus, Session};

/// Traversal sense around the center, as seen on a y-down surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Unknown,
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `+1` clockwise, `-1` counter-clockwise, `0` unknown.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Unknown => 0,
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }

    fn from_sweep(sweep: f64) -> Self {
        if sweep > 0.0 {
            Self::Clockwise
        } else if sweep < 0.0 {
            Self::CounterClockwise
        } else {
            Self::Unknown
        }
    }

    /// Whether a step of `delta` radians runs against this direction by more
    /// than `tolerance`.
    fn opposes(self, delta: f64, tolerance: f64) -> bool {
        match self {
            Self::Unknown => false,
            Self::Clockwise => delta < -tolerance,
            Self::CounterClockwise => delta > tolerance,
        }
    }
}

/// Circle tracing engine for one drawing surface.
#[derive(Debug, Clone)]
pub struct CircleEngine {
    config: CircleConfig,
    /// Center of the surface as last resized.
    surface: Center,
    /// Center the current attempt is scored against.
    center: Center,
    session: Session,
    path: Vec<Point>,
    press: Option<Point>,
    start_angle: Option<f64>,
    last_angle: Option<f64>,
    direction: Direction,
    /// Signed angle swept so far, in radians.
    sweep: f64,
    too_close: bool,
}

impl CircleEngine {
    #[must_use]
    pub fn new(config: CircleConfig) -> Self {
        Self {
            config,
            surface: Center::default(),
            center: Center::default(),
            session: Session::new(),
            path: Vec::new(),
            press: None,
            start_angle: None,
            last_angle: None,
            direction: Direction::Unknown,
            sweep: 0.0,
            too_close: false,
        }
    }

    /// The recorded path of the current attempt.
    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The center the current attempt is measured against.
    #[must_use]
    pub fn center(&self) -> Center {
        self.center
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn config(&self) -> &CircleConfig {
        &self.config
    }

    /// Center used for the too-close test: the attempt's while drawing, the
    /// surface's otherwise.
    fn reference_center(&self) -> Center {
        if self.session.is_drawing() { self.center } else { self.surface }
    }

    fn near_center(&self, point: Point) -> bool {
        distance(point, self.reference_center().as_point()) < self.config.proximity_threshold
    }

    fn reset_attempt(&mut self) {
        self.session.reset();
        self.path.clear();
        self.press = None;
        self.start_angle = None;
        self.last_angle = None;
        self.direction = Direction::Unknown;
        self.sweep = 0.0;
    }

    fn finish(&mut self, completion: Completion) -> Action {
        let score = circle_precision(&self.path, self.center, self.config.min_precision_points);
        self.session.finish(completion, score);
        Action::Finished { completion, score }
    }

    /// First accepted movement after a press: seed the path and start drawing.
    fn begin_stroke(&mut self, point: Point) -> Action {
        if self.too_close {
            return Action::TooClose;
        }
        let first = match self.press.take() {
            Some(press) => press,
            None => {
                self.center = self.surface;
                point
            }
        };
        let first_angle = angle(first, self.center);
        let current = angle(point, self.center);

        self.path = vec![first, point];
        self.start_angle = Some(first_angle);
        self.last_angle = Some(current);
        self.sweep = signed_angle_delta(first_angle, current);
        self.session.begin();
        Action::RenderNeeded
    }

    fn extend_stroke(&mut self, point: Point) -> Action {
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return Action::None;
        };
        if distance(point, last) < self.config.min_distance {
            tracing::trace!(x = point.x, y = point.y, "sample below minimum spacing");
            return Action::None;
        }
        self.path.push(point);

        let current = angle(point, self.center);
        let delta = signed_angle_delta(self.last_angle.unwrap_or(current), current);
        let start_angle = self.start_angle.unwrap_or(current);
        let closing = self.sweep.abs() >= self.config.min_sweep
            && distance(point, first) < self.config.closure_distance;

        if !closing && self.direction.opposes(delta, self.config.backtrack_tolerance) {
            tracing::debug!(delta, direction = ?self.direction, "backtracking");
            return self.finish(Completion::Incomplete);
        }

        if !closing && self.overlaps_earlier(point) {
            tracing::debug!(x = point.x, y = point.y, "path crossed itself");
            return self.finish(Completion::Incomplete);
        }

        if self.path.len() > self.config.min_points_to_stop
            && self.sweep.abs() >= self.config.min_sweep
            && angle_diff(current, start_angle) < self.config.axis_stop_threshold
        {
            if distance(point, first) < self.config.loop_snap_distance {
                if let Some(closing_point) = self.path.last_mut() {
                    *closing_point = first;
                }
            }
            tracing::debug!(points = self.path.len(), "returned to start angle");
            return self.finish(Completion::Success);
        }

        self.last_angle = Some(current);
        self.sweep += delta;
        if self.direction == Direction::Unknown && self.path.len() > self.config.direction_settle_points {
            self.direction = Direction::from_sweep(self.sweep);
            if self.direction != Direction::Unknown {
                tracing::debug!(direction = ?self.direction, "direction settled");
            }
        }

        let score = circle_precision(&self.path, self.center, self.config.min_precision_points);
        self.session.publish_score(score);
        match score {
            Some(score) => Action::ScoreUpdated(score),
            None => Action::RenderNeeded,
        }
    }

    /// Whether `point` lies on the path drawn before the most recent samples.
    fn overlaps_earlier(&self, point: Point) -> bool {
        let end = self.path.len().saturating_sub(self.config.overlap_skip_points.max(1));
        self.path[..end]
            .iter()
            .any(|p| distance(*p, point) < self.config.overlap_threshold)
    }
}

impl ShapeEngine for CircleEngine {
    fn shape(&self) -> Shape {
        Shape::Circle
    }

    fn start(&mut self, point: Point) -> Action {
        if self.session.is_drawing() {
            return Action::None;
        }
        self.too_close = self.near_center(point);
        if self.too_close {
            tracing::trace!(x = point.x, y = point.y, "press too close to center");
            return Action::TooClose;
        }

        let reset = self.session.is_finished();
        if reset {
            self.reset_attempt();
        }
        self.center = self.surface;
        self.start_angle = Some(angle(point, self.center));
        self.press = Some(point);

        if reset { Action::Reset } else { Action::None }
    }

    fn move_to(&mut self, point: Point, pressed: bool) -> Action {
        self.too_close = self.near_center(point);
        if !pressed {
            return Action::None;
        }
        match self.session.status() {
            GameStatus::Finished => Action::None,
            GameStatus::Idle => self.begin_stroke(point),
            GameStatus::Drawing => self.extend_stroke(point),
        }
    }

    fn stop(&mut self) -> Action {
        self.press = None;
        if !self.session.is_drawing() {
            self.start_angle = None;
            return Action::None;
        }
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return self.finish(Completion::Incomplete);
        };

        let start_angle = self.start_angle.unwrap_or_else(|| angle(first, self.center));
        let gap = distance(last, first);
        let turn = angle_diff(angle(last, self.center), start_angle);
        let swept = self.sweep.abs() >= self.config.min_sweep;

        let completion = if swept && (gap < self.config.success_distance || turn < self.config.success_angle) {
            if gap < self.config.closure_distance {
                self.path.push(first);
            }
            Completion::Success
        } else if swept && turn < self.config.close_angle {
            Completion::Close
        } else {
            Completion::Incomplete
        };
        tracing::debug!(gap, turn, sweep = self.sweep, ?completion, "released");
        self.finish(completion)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.surface = Center::of_surface(width, height);
        if self.session.status() == GameStatus::Idle {
            self.center = self.surface;
        }
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn is_too_close(&self) -> bool {
        self.too_close
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            shape: Shape::Circle,
            status: self.session.status(),
            completion: self.session.completion(),
            score: self.session.score(),
            too_close: self.too_close,
            strokes: vec![self.path.clone()],
            anchors: vec![self.center.as_point()],
            visited: Vec::new(),
        }
    }
}
