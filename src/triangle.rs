//! Triangle engine: connect-the-dots tracing of an equilateral triangle.
//!
//! An attempt must begin on one of the three target vertices. Reaching a
//! vertex not yet visited closes the current edge and opens the next one. A
//! release is a success only when all three vertices were visited and the
//! pointer is back on the start vertex; the score is then the straightness of
//! the three traced edges.

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use crate::config::TriangleConfig;
use crate::engine::{Action, Shape, ShapeEngine, Snapshot};
use crate::geom::{Point, distance, triangle_vertices};
use crate::score::triangle_score;
use crate::session::{Completion, GameStatus, Session};

/// Number of target vertices.
const CORNERS: usize = 3;

/// Triangle tracing engine for one drawing surface.
#[derive(Debug, Clone)]
pub struct TriangleEngine {
    config: TriangleConfig,
    /// Target vertices for the surface as last resized.
    surface: [Point; CORNERS],
    /// Target vertices of the current attempt.
    vertices: [Point; CORNERS],
    session: Session,
    completed_edges: Vec<Vec<Point>>,
    current_edge: Vec<Point>,
    /// Vertex indices in visiting order; the first is the start vertex.
    visited: Vec<usize>,
    last_point: Option<Point>,
}

impl TriangleEngine {
    #[must_use]
    pub fn new(config: TriangleConfig) -> Self {
        let origin = [Point::new(0.0, 0.0); CORNERS];
        Self {
            config,
            surface: origin,
            vertices: origin,
            session: Session::new(),
            completed_edges: Vec::new(),
            current_edge: Vec::new(),
            visited: Vec::new(),
            last_point: None,
        }
    }

    /// Target vertices of the current attempt.
    #[must_use]
    pub fn vertices(&self) -> [Point; CORNERS] {
        self.vertices
    }

    #[must_use]
    pub fn completed_edges(&self) -> &[Vec<Point>] {
        &self.completed_edges
    }

    #[must_use]
    pub fn current_edge(&self) -> &[Point] {
        &self.current_edge
    }

    #[must_use]
    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    #[must_use]
    pub fn config(&self) -> &TriangleConfig {
        &self.config
    }

    /// Index of the first vertex within snapping distance of `point`.
    fn snap(&self, point: Point) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| distance(point, *v) < self.config.snap_distance)
    }

    fn visited_all(&self) -> bool {
        (0..CORNERS).all(|i| self.visited.contains(&i))
    }

    fn reset_attempt(&mut self) {
        self.session.reset();
        self.completed_edges.clear();
        self.current_edge.clear();
        self.visited.clear();
        self.last_point = None;
        self.vertices = self.surface;
    }

    /// Whether the last sample is back on the start vertex.
    fn back_at_start(&self) -> bool {
        let start = self.visited.first().and_then(|&i| self.vertices.get(i));
        match (start, self.last_point) {
            (Some(&start), Some(last)) => distance(last, start) < self.config.close_distance,
            _ => false,
        }
    }
}

impl ShapeEngine for TriangleEngine {
    fn shape(&self) -> Shape {
        Shape::Triangle
    }

    fn start(&mut self, point: Point) -> Action {
        match self.session.status() {
            GameStatus::Drawing => return Action::None,
            GameStatus::Finished => {
                self.reset_attempt();
                return Action::Reset;
            }
            GameStatus::Idle => {}
        }

        self.vertices = self.surface;
        let Some(index) = self.snap(point) else {
            tracing::trace!(x = point.x, y = point.y, "press away from every vertex");
            return Action::None;
        };
        let vertex = self.vertices[index];
        self.visited = vec![index];
        self.current_edge = vec![vertex];
        self.last_point = Some(vertex);
        self.session.begin();
        tracing::debug!(vertex = index, "triangle started");
        Action::RenderNeeded
    }

    fn move_to(&mut self, point: Point, pressed: bool) -> Action {
        if !pressed || !self.session.is_drawing() {
            return Action::None;
        }
        self.current_edge.push(point);
        self.last_point = Some(point);

        if let Some(index) = self.snap(point) {
            // Revisits (including the start vertex on the way home) never
            // close an edge; the release decides.
            if !self.visited.contains(&index) {
                let edge = std::mem::replace(&mut self.current_edge, vec![point]);
                self.completed_edges.push(edge);
                self.visited.push(index);
                tracing::debug!(vertex = index, edges = self.completed_edges.len(), "edge completed");
            }
        }
        Action::RenderNeeded
    }

    fn stop(&mut self) -> Action {
        if !self.session.is_drawing() {
            return Action::None;
        }
        if self.visited_all() && self.back_at_start() {
            let last_edge = std::mem::take(&mut self.current_edge);
            self.completed_edges.push(last_edge);
            let score = triangle_score(&self.completed_edges, &self.config);
            self.session.finish(Completion::Success, Some(score));
            return Action::Finished { completion: Completion::Success, score: Some(score) };
        }
        tracing::debug!(visited = ?self.visited, "triangle left open");
        self.session.finish(Completion::Incomplete, None);
        Action::Finished { completion: Completion::Incomplete, score: None }
    }

    fn resize(&mut self, width: f64, height: f64) {
        let side = self.config.side_for_width(width);
        self.surface = triangle_vertices(width / 2.0, height / 2.0, side);
        if self.session.status() == GameStatus::Idle {
            self.vertices = self.surface;
        }
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn snapshot(&self) -> Snapshot {
        let mut strokes = self.completed_edges.clone();
        if !self.current_edge.is_empty() {
            strokes.push(self.current_edge.clone());
        }
        Snapshot {
            shape: Shape::Triangle,
            status: self.session.status(),
            completion: self.session.completion(),
            score: self.session.score(),
            too_close: false,
            strokes,
            anchors: self.vertices.to_vec(),
            visited: self.visited.clone(),
        }
    }
}
