//! The one-line status message shown above the drawing surface.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::fmt;

use serde::Serialize;

use crate::engine::{Shape, Snapshot};
use crate::score::PrecisionTier;
use crate::session::{Completion, GameStatus};

/// What the presentation layer should tell the user right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// Idle pointer is inside the proximity ring.
    TooClose,
    /// Waiting for an attempt.
    Prompt { shape: Shape },
    /// Drawing, but too few points for a score.
    Pending,
    /// Finished without closing the shape.
    Incomplete { shape: Shape },
    /// Finished just short of closing the shape.
    Close,
    /// A live or final score.
    Precision { score: u8, tier: PrecisionTier },
}

impl Feedback {
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        match snapshot.status {
            GameStatus::Idle if snapshot.too_close => Self::TooClose,
            GameStatus::Idle => Self::Prompt { shape: snapshot.shape },
            GameStatus::Finished if snapshot.completion == Some(Completion::Incomplete) => {
                Self::Incomplete { shape: snapshot.shape }
            }
            GameStatus::Finished if snapshot.completion == Some(Completion::Close) => Self::Close,
            GameStatus::Drawing | GameStatus::Finished => match snapshot.score {
                Some(score) => Self::Precision { score, tier: PrecisionTier::from_score(score) },
                None => Self::Pending,
            },
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooClose => f.write_str("You are too close to the center"),
            Self::Prompt { shape: Shape::Circle } => f.write_str("Try to draw a perfect circle"),
            Self::Prompt { shape: Shape::Triangle } => f.write_str("Connect the dots to draw a triangle"),
            Self::Pending => Ok(()),
            Self::Incomplete { shape: Shape::Circle } => f.write_str("Circle incomplete, Try Again!"),
            Self::Incomplete { shape: Shape::Triangle } => f.write_str("Incomplete, Try Again!"),
            Self::Close => f.write_str("So close!"),
            Self::Precision { score, .. } => write!(f, "Precision: {score}%"),
        }
    }
}
