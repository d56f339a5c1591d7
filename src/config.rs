//! Tunable thresholds for both engines, with optional environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;
use std::env::VarError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Environment variables read by [`GameConfig::from_env`].
const ENV_KEYS: [&str; 7] = [
    "FREEHAND_PROXIMITY_THRESHOLD",
    "FREEHAND_MIN_DISTANCE",
    "FREEHAND_MIN_POINTS_TO_STOP",
    "FREEHAND_AXIS_STOP_THRESHOLD",
    "FREEHAND_SNAP_DISTANCE",
    "FREEHAND_TRIANGLE_SIZE",
    "FREEHAND_ANGLE_WEIGHT",
];

/// Error returned by [`GameConfig::from_env`] and [`GameConfig::from_lookup`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set but does not parse as the expected number.
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    /// The variable parses but lies outside its allowed range.
    #[error("{key} out of range: {value} (expected {expected})")]
    OutOfRange { key: &'static str, value: String, expected: &'static str },
}

/// Circle engine thresholds. Distances in pixels, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    pub proximity_threshold: f64,
    pub min_distance: f64,
    pub min_points_to_stop: usize,
    pub axis_stop_threshold: f64,
    pub direction_settle_points: usize,
    pub backtrack_tolerance: f64,
    pub overlap_threshold: f64,
    pub overlap_skip_points: usize,
    pub loop_snap_distance: f64,
    pub success_distance: f64,
    pub closure_distance: f64,
    pub success_angle: f64,
    pub close_angle: f64,
    pub min_sweep: f64,
    pub min_precision_points: usize,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: consts::PROXIMITY_THRESHOLD,
            min_distance: consts::MIN_DISTANCE_THRESHOLD,
            min_points_to_stop: consts::MIN_POINTS_TO_STOP,
            axis_stop_threshold: consts::AXIS_STOP_THRESHOLD,
            direction_settle_points: consts::DIRECTION_SETTLE_POINTS,
            backtrack_tolerance: consts::BACKTRACK_TOLERANCE,
            overlap_threshold: consts::OVERLAP_THRESHOLD,
            overlap_skip_points: consts::OVERLAP_SKIP_POINTS,
            loop_snap_distance: consts::LOOP_SNAP_DISTANCE,
            success_distance: consts::SUCCESS_DISTANCE,
            closure_distance: consts::CLOSURE_DISTANCE,
            success_angle: consts::SUCCESS_ANGLE,
            close_angle: consts::CLOSE_ANGLE,
            min_sweep: consts::MIN_SWEEP,
            min_precision_points: consts::MIN_PRECISION_POINTS,
        }
    }
}

/// Triangle engine thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleConfig {
    /// Side length used when the surface is wide enough.
    pub nominal_side: f64,
    /// Side length never exceeds this fraction of the surface width.
    pub side_fraction: f64,
    pub snap_distance: f64,
    pub close_distance: f64,
    pub straightness_penalty: f64,
    /// Weight of the corner-angle term in the final score, `0.0..=1.0`.
    ///
    /// Zero scores on straightness alone.
    pub angle_weight: f64,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            nominal_side: consts::TRIANGLE_SIZE,
            side_fraction: consts::SIDE_FRACTION,
            snap_distance: consts::SNAP_DISTANCE,
            close_distance: consts::CLOSE_DISTANCE,
            straightness_penalty: consts::STRAIGHTNESS_PENALTY,
            angle_weight: 0.0,
        }
    }
}

impl TriangleConfig {
    /// Side length of the target triangle on a surface `width` pixels wide.
    #[must_use]
    pub fn side_for_width(&self, width: f64) -> f64 {
        (width * self.side_fraction).min(self.nominal_side)
    }
}

/// Configuration for a [`crate::engine::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub circle: CircleConfig,
    pub triangle: TriangleConfig,
}

impl GameConfig {
    /// Build a config from defaults plus environment overrides.
    ///
    /// Optional:
    /// - `FREEHAND_PROXIMITY_THRESHOLD`: pixels, default 50
    /// - `FREEHAND_MIN_DISTANCE`: pixels, default 4
    /// - `FREEHAND_MIN_POINTS_TO_STOP`: default 50
    /// - `FREEHAND_AXIS_STOP_THRESHOLD`: radians, default 0.05
    /// - `FREEHAND_SNAP_DISTANCE`: pixels, default 20
    /// - `FREEHAND_TRIANGLE_SIZE`: pixels, default 300
    /// - `FREEHAND_ANGLE_WEIGHT`: `0.0..=1.0`, default 0
    ///
    /// A variable holding non-Unicode bytes is [`ConfigError::Invalid`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for key in ENV_KEYS {
            if let Some(value) = env_value(key, std::env::var(key))? {
                vars.insert(key, value);
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Same as [`GameConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let circle = &mut config.circle;
        let triangle = &mut config.triangle;

        override_with(&lookup, "FREEHAND_PROXIMITY_THRESHOLD", &mut circle.proximity_threshold)?;
        override_with(&lookup, "FREEHAND_MIN_DISTANCE", &mut circle.min_distance)?;
        override_with(&lookup, "FREEHAND_MIN_POINTS_TO_STOP", &mut circle.min_points_to_stop)?;
        override_with(&lookup, "FREEHAND_AXIS_STOP_THRESHOLD", &mut circle.axis_stop_threshold)?;
        override_with(&lookup, "FREEHAND_SNAP_DISTANCE", &mut triangle.snap_distance)?;
        override_with(&lookup, "FREEHAND_TRIANGLE_SIZE", &mut triangle.nominal_side)?;
        override_with(&lookup, "FREEHAND_ANGLE_WEIGHT", &mut triangle.angle_weight)?;

        for (key, value) in [
            ("FREEHAND_PROXIMITY_THRESHOLD", circle.proximity_threshold),
            ("FREEHAND_MIN_DISTANCE", circle.min_distance),
            ("FREEHAND_AXIS_STOP_THRESHOLD", circle.axis_stop_threshold),
            ("FREEHAND_SNAP_DISTANCE", triangle.snap_distance),
            ("FREEHAND_TRIANGLE_SIZE", triangle.nominal_side),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { key, value: value.to_string(), expected: "a finite value >= 0" });
            }
        }
        if !(0.0..=1.0).contains(&triangle.angle_weight) {
            return Err(ConfigError::OutOfRange {
                key: "FREEHAND_ANGLE_WEIGHT",
                value: triangle.angle_weight.to_string(),
                expected: "0.0..=1.0",
            });
        }

        Ok(config)
    }
}

/// The value of `key` if set; an error if it is set but not Unicode.
fn env_value(key: &'static str, var: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Invalid { key, value: raw.to_string_lossy().into_owned() }),
    }
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    match raw.trim().parse::<T>() {
        Ok(value) => {
            *slot = value;
            Ok(())
        }
        Err(_) => Err(ConfigError::Invalid { key, value: raw }),
    }
}
