//! JavaScript bindings.
//!
//! `FreehandGame` wraps [`Game`] for a browser host: the host forwards pointer
//! and resize events in surface-local CSS pixels and reads state back for
//! rendering. Painting stays on the JavaScript side.

#[cfg(test)]
#[path = "wasm_test.rs"]
mod wasm_test;

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::engine::{Action, Game, Shape};
use crate::geom::Point;

/// Bit of `PointerEvent.buttons` set while the primary button is held.
const PRIMARY_BUTTON: u16 = 1;

#[wasm_bindgen]
pub struct FreehandGame {
    game: Game,
}

#[wasm_bindgen]
impl FreehandGame {
    /// Create a game for `"circle"` or `"triangle"` with default thresholds.
    #[wasm_bindgen(constructor)]
    pub fn new(shape: &str) -> Result<FreehandGame, JsError> {
        let shape: Shape = shape.parse()?;
        Ok(Self { game: Game::new(shape, GameConfig::default()) })
    }

    #[wasm_bindgen(js_name = setShape)]
    pub fn set_shape(&mut self, shape: &str) -> Result<(), JsError> {
        let shape: Shape = shape.parse()?;
        self.game.set_shape(shape);
        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.game.on_resize(width, height);
    }

    /// Returns whether the host should redraw.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        needs_render(self.game.on_pointer_down(Point::new(x, y)))
    }

    /// `buttons` is the raw `PointerEvent.buttons` bitmask.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64, buttons: u16) -> bool {
        let pressed = buttons & PRIMARY_BUTTON != 0;
        needs_render(self.game.on_pointer_move(Point::new(x, y), pressed))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        needs_render(self.game.on_pointer_up())
    }

    #[must_use]
    pub fn shape(&self) -> String {
        self.game.shape().to_string()
    }

    #[must_use]
    pub fn status(&self) -> String {
        format!("{:?}", self.game.status()).to_lowercase()
    }

    /// `"success"`, `"close"`, `"incomplete"`, or `undefined`.
    #[must_use]
    pub fn completion(&self) -> Option<String> {
        self.game.completion().map(|c| format!("{c:?}").to_lowercase())
    }

    #[must_use]
    pub fn score(&self) -> Option<u8> {
        self.game.score()
    }

    #[wasm_bindgen(js_name = isTooClose)]
    #[must_use]
    pub fn is_too_close(&self) -> bool {
        self.game.is_too_close()
    }

    #[must_use]
    pub fn feedback(&self) -> String {
        self.game.feedback().to_string()
    }

    /// Strokes, anchors and status as a JSON string.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.snapshot())?)
    }
}

fn needs_render(action: Action) -> bool {
    action != Action::None
}
