//! Session state machine shared by the shape engines.
//!
//! A session walks `Idle → Drawing → Finished → Idle → …` and owns the
//! attempt's classification and score. Fields are private: the only way to
//! change them is through the transitions below, each of which ignores calls
//! made from the wrong state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Lifecycle of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Ready for a new attempt.
    #[default]
    Idle,
    /// Accumulating points.
    Drawing,
    /// Attempt ended; no points are accepted until the next reset.
    Finished,
}

/// How a finished attempt was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// Abandoned or structurally invalid.
    Incomplete,
    /// Nearly closed, but outside tolerance.
    Close,
    /// Matched the target shape.
    Success,
}

/// Status, classification, and score of the current attempt.
#[derive(Debug, Clone, Default)]
pub struct Session {
    status: GameStatus,
    completion: Option<Completion>,
    score: Option<u8>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Classification of the attempt; `Some` only once finished.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.status == GameStatus::Drawing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// `Idle → Drawing`. Returns whether the transition happened.
    pub fn begin(&mut self) -> bool {
        if self.status != GameStatus::Idle {
            tracing::debug!(status = ?self.status, "begin ignored");
            return false;
        }
        self.status = GameStatus::Drawing;
        tracing::debug!("attempt started");
        true
    }

    /// Replace the live score while drawing.
    pub fn publish_score(&mut self, score: Option<u8>) {
        if self.status == GameStatus::Drawing {
            self.score = score;
        }
    }

    /// `Drawing → Finished` with the final classification and score.
    ///
    /// Returns whether the transition happened.
    pub fn finish(&mut self, completion: Completion, score: Option<u8>) -> bool {
        if self.status != GameStatus::Drawing {
            tracing::debug!(status = ?self.status, ?completion, "finish ignored");
            return false;
        }
        self.status = GameStatus::Finished;
        self.completion = Some(completion);
        self.score = score;
        tracing::debug!(?completion, ?score, "attempt finished");
        true
    }

    /// `Finished → Idle`, clearing the classification and score.
    ///
    /// Returns whether the transition happened.
    pub fn reset(&mut self) -> bool {
        if self.status != GameStatus::Finished {
            return false;
        }
        *self = Self::default();
        tracing::debug!("session reset");
        true
    }
}
