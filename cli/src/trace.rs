//! Recorded pointer traces: one JSON event per line, replayed into a [`Game`].

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use std::io::{self, BufRead};

use freehand::engine::Action;
use freehand::feedback::Feedback;
use freehand::{Completion, Game, GameStatus, Point, Shape};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("read trace: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One host event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    Resize {
        width: f64,
        height: f64,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default = "held")]
        pressed: bool,
    },
    Up,
}

fn held() -> bool {
    true
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, number: usize) -> Result<Option<TraceEvent>, TraceError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| TraceError::Json { line: number, source })
}

pub fn read_events(reader: impl BufRead) -> Result<Vec<TraceEvent>, TraceError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if let Some(event) = parse_line(&line?, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Feed one event to the game.
pub fn apply(game: &mut Game, event: TraceEvent) -> Action {
    match event {
        TraceEvent::Resize { width, height } => {
            game.on_resize(width, height);
            Action::None
        }
        TraceEvent::Down { x, y } => game.on_pointer_down(Point::new(x, y)),
        TraceEvent::Move { x, y, pressed } => game.on_pointer_move(Point::new(x, y), pressed),
        TraceEvent::Up => game.on_pointer_up(),
    }
}

/// Outcome of a replayed trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub shape: Shape,
    pub status: GameStatus,
    pub completion: Option<Completion>,
    pub score: Option<u8>,
    pub feedback: Feedback,
    pub message: String,
    pub events: usize,
    /// Index of the event that ended the first attempt.
    pub finished_at: Option<usize>,
    /// Points kept across all strokes.
    pub points: usize,
}

pub fn replay(game: &mut Game, events: &[TraceEvent]) -> Summary {
    let mut finished_at = None;
    for (index, event) in events.iter().enumerate() {
        let action = apply(game, *event);
        if let Action::Finished { completion, score } = action {
            tracing::debug!(index, ?completion, ?score, "attempt finished");
            finished_at.get_or_insert(index);
        }
    }

    let snapshot = game.snapshot();
    let feedback = game.feedback();
    Summary {
        shape: snapshot.shape,
        status: snapshot.status,
        completion: snapshot.completion,
        score: snapshot.score,
        feedback,
        message: feedback.to_string(),
        events: events.len(),
        finished_at,
        points: snapshot.strokes.iter().map(Vec::len).sum(),
    }
}
