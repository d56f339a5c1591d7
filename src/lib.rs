//! Freehand shape-tracing engine.
//!
//! The user traces a circle or a triangle with a pointing device; this crate
//! consumes the live stream of points, decides on its own when the attempt is
//! over, and scores how close the trace came to the ideal shape. It compiles
//! to WebAssembly for a browser host, which only forwards pointer and resize
//! events and paints whatever [`engine::Snapshot`] it reads back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::ShapeEngine`] trait, [`engine::Game`] dispatcher, actions and snapshots |
//! | [`circle`] | Circle engine: live precision, backtrack/overlap/axis stop |
//! | [`triangle`] | Triangle engine: vertex snaps, edge archive, straightness |
//! | [`session`] | Attempt lifecycle and classification |
//! | [`score`] | Precision, straightness and corner-angle scores |
//! | [`geom`] | Points and pure 2D math |
//! | [`feedback`] | Status line for the presentation layer |
//! | [`config`] | Tunable thresholds and environment overrides |
//! | [`consts`] | Default threshold values |
//! | [`wasm`] | `wasm-bindgen` facade over [`engine::Game`] |

pub mod circle;
pub mod config;
pub mod consts;
pub mod engine;
pub mod feedback;
pub mod geom;
pub mod score;
pub mod session;
pub mod triangle;
pub mod wasm;

pub use config::{CircleConfig, ConfigError, GameConfig, TriangleConfig};
pub use engine::{Action, Game, Shape, ShapeEngine, ShapeError, Snapshot};
pub use geom::{Center, Point};
pub use session::{Completion, GameStatus};
