use std::f64::consts::TAU;

use super::*;

// `JsError` can only be built on a wasm target, so these tests stay on the
// success paths.

fn game(shape: &str) -> FreehandGame {
    let Ok(mut g) = FreehandGame::new(shape) else {
        panic!("{shape} should parse");
    };
    g.resize(500.0, 500.0);
    g
}

fn ring(turns: f64) -> (f64, f64) {
    let a = turns * TAU;
    (250.0 + 100.0 * a.cos(), 250.0 + 100.0 * a.sin())
}

#[test]
fn starts_idle_with_prompt() {
    let g = game("triangle");
    assert_eq!(g.shape(), "triangle");
    assert_eq!(g.status(), "idle");
    assert_eq!(g.completion(), None);
    assert_eq!(g.feedback(), "Connect the dots to draw a triangle");
}

#[test]
fn move_without_primary_button_is_hover() {
    let mut g = game("circle");
    assert!(!g.pointer_move(252.0, 250.0, 2));
    assert!(g.is_too_close());
    assert_eq!(g.status(), "idle");
}

#[test]
fn circle_round_trip_reports_success() {
    let mut g = game("circle");
    let (x, y) = ring(0.0);
    g.pointer_down(x, y);
    for i in 1..=60_u32 {
        let (x, y) = ring(f64::from(i) / 60.0);
        assert!(g.pointer_move(x, y, PRIMARY_BUTTON));
    }

    assert_eq!(g.status(), "finished");
    assert_eq!(g.completion().as_deref(), Some("success"));
    assert_eq!(g.score(), Some(100));
    assert_eq!(g.feedback(), "Precision: 100%");
    assert!(!g.pointer_up());
}

#[test]
fn set_shape_switches_engine() {
    let mut g = game("circle");
    assert!(g.set_shape("Triangle").is_ok());
    assert_eq!(g.shape(), "triangle");
}

#[test]
fn snapshot_json_is_parseable() {
    let g = game("circle");
    let Ok(json) = g.snapshot_json() else {
        panic!("snapshot should encode");
    };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "idle");
}
