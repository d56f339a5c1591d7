use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::circle::CircleEngine;
use crate::config::GameConfig;
use crate::feedback::Feedback;
use crate::geom::Point;
use crate::session::{Completion, GameStatus, Session};
use crate::triangle::TriangleEngine;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// The sample was refused because it lies too close to the center.
    TooClose,
    /// A finished attempt was cleared; the engine is idle again.
    Reset,
    /// The path changed but there is no score to show yet.
    RenderNeeded,
    /// The path changed and the live score is now this value.
    ScoreUpdated(u8),
    /// The attempt ended.
    Finished { completion: Completion, score: Option<u8> },
}

/// Target shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Triangle,
}

/// Error returned when parsing a [`Shape`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("unknown shape {0:?} (expected \"circle\" or \"triangle\")")]
    Unknown(String),
}

impl Shape {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            _ => Err(ShapeError::Unknown(s.to_string())),
        }
    }
}

/// Read-only copy of an engine's state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub shape: Shape,
    pub status: GameStatus,
    pub completion: Option<Completion>,
    pub score: Option<u8>,
    pub too_close: bool,
    /// Traced polylines: the whole path for a circle, one per edge for a triangle.
    pub strokes: Vec<Vec<Point>>,
    /// Guide points: the center for a circle, the vertices for a triangle.
    pub anchors: Vec<Point>,
    /// Indices into `anchors` visited so far, in order.
    pub visited: Vec<usize>,
}

/// A scoring engine for one target shape.
///
/// Every input call is a complete transaction against the engine's own state
/// and reports what changed as an [`Action`].
pub trait ShapeEngine: fmt::Debug + Send {
    fn shape(&self) -> Shape;

    /// Pointer press.
    fn start(&mut self, point: Point) -> Action;

    /// Pointer movement; `pressed` is whether the primary button is held.
    fn move_to(&mut self, point: Point, pressed: bool) -> Action;

    /// Pointer release or leave.
    fn stop(&mut self) -> Action;

    /// The drawing surface changed size. Never moves the target of an
    /// attempt already in progress.
    fn resize(&mut self, width: f64, height: f64);

    fn session(&self) -> &Session;

    fn snapshot(&self) -> Snapshot;

    fn is_too_close(&self) -> bool {
        false
    }

    fn status(&self) -> GameStatus {
        self.session().status()
    }

    fn completion(&self) -> Option<Completion> {
        self.session().completion()
    }

    fn score(&self) -> Option<u8> {
        self.session().score()
    }
}

fn build_engine(shape: Shape, config: &GameConfig) -> Box<dyn ShapeEngine> {
    match shape {
        Shape::Circle => Box::new(CircleEngine::new(config.circle)),
        Shape::Triangle => Box::new(TriangleEngine::new(config.triangle)),
    }
}

/// The active shape engine plus the surface it draws on.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    width: f64,
    height: f64,
    engine: Box<dyn ShapeEngine>,
}

impl Game {
    #[must_use]
    pub fn new(shape: Shape, config: GameConfig) -> Self {
        Self { config, width: 0.0, height: 0.0, engine: build_engine(shape, &config) }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.engine.shape()
    }

    /// Switch to `shape` with a fresh engine sized to the current surface.
    pub fn set_shape(&mut self, shape: Shape) -> Action {
        tracing::debug!(from = %self.engine.shape(), to = %shape, "shape selected");
        self.engine = build_engine(shape, &self.config);
        self.engine.resize(self.width, self.height);
        Action::Reset
    }

    // --- Surface ---

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.engine.resize(width, height);
    }

    #[must_use]
    pub fn surface_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, point: Point) -> Action {
        self.engine.start(point)
    }

    pub fn on_pointer_move(&mut self, point: Point, pressed: bool) -> Action {
        self.engine.move_to(point, pressed)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.engine.stop()
    }

    // --- Queries ---

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.engine.completion()
    }

    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.engine.score()
    }

    #[must_use]
    pub fn is_too_close(&self) -> bool {
        self.engine.is_too_close()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// The status line to show for the current state.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        Feedback::from_snapshot(&self.snapshot())
    }
}
