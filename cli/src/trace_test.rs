use std::io::Cursor;

use freehand::GameConfig;

use super::*;

fn game(shape: Shape) -> Game {
    Game::new(shape, GameConfig::default())
}

#[test]
fn parses_each_event_kind() {
    assert_eq!(
        parse_line(r#"{"kind":"resize","width":500,"height":400}"#, 1).unwrap(),
        Some(TraceEvent::Resize { width: 500.0, height: 400.0 })
    );
    assert_eq!(parse_line(r#"{"kind":"down","x":1,"y":2}"#, 1).unwrap(), Some(TraceEvent::Down { x: 1.0, y: 2.0 }));
    assert_eq!(
        parse_line(r#"{"kind":"move","x":3,"y":4,"pressed":false}"#, 1).unwrap(),
        Some(TraceEvent::Move { x: 3.0, y: 4.0, pressed: false })
    );
    assert_eq!(parse_line(r#"{"kind":"up"}"#, 1).unwrap(), Some(TraceEvent::Up));
}

#[test]
fn move_defaults_to_pressed() {
    assert_eq!(
        parse_line(r#"{"kind":"move","x":3,"y":4}"#, 1).unwrap(),
        Some(TraceEvent::Move { x: 3.0, y: 4.0, pressed: true })
    );
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line("   ", 1).unwrap(), None);
    assert_eq!(parse_line("# recorded on a tablet", 2).unwrap(), None);
}

#[test]
fn bad_line_reports_its_number() {
    let input = "{\"kind\":\"up\"}\n\n{\"kind\":\"jump\"}\n";
    let err = read_events(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, TraceError::Json { line: 3, .. }));
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn reads_all_events_in_order() {
    let input = r#"{"kind":"resize","width":500,"height":500}
{"kind":"down","x":350,"y":250}
{"kind":"up"}
"#;
    let events = read_events(Cursor::new(input)).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], TraceEvent::Up);
}

#[test]
fn resize_event_reaches_game() {
    let mut g = game(Shape::Circle);
    assert_eq!(apply(&mut g, TraceEvent::Resize { width: 300.0, height: 200.0 }), Action::None);
    assert_eq!(g.surface_size(), (300.0, 200.0));
}

#[test]
fn replay_of_short_stroke_is_incomplete() {
    let mut g = game(Shape::Circle);
    let events = [
        TraceEvent::Resize { width: 500.0, height: 500.0 },
        TraceEvent::Down { x: 350.0, y: 250.0 },
        TraceEvent::Move { x: 349.0, y: 260.0, pressed: true },
        TraceEvent::Move { x: 346.0, y: 270.0, pressed: true },
        TraceEvent::Up,
    ];

    let summary = replay(&mut g, &events);

    assert_eq!(summary.status, GameStatus::Finished);
    assert_eq!(summary.completion, Some(Completion::Incomplete));
    assert_eq!(summary.score, None);
    assert_eq!(summary.message, "Circle incomplete, Try Again!");
    assert_eq!(summary.finished_at, Some(4));
    assert_eq!(summary.events, 5);
    assert_eq!(summary.points, 3);
}

#[test]
fn replay_without_events_is_idle() {
    let mut g = game(Shape::Triangle);
    let summary = replay(&mut g, &[]);
    assert_eq!(summary.status, GameStatus::Idle);
    assert_eq!(summary.finished_at, None);
    assert_eq!(summary.message, "Connect the dots to draw a triangle");
}

#[test]
fn summary_serializes_feedback_tag() {
    let mut g = game(Shape::Circle);
    let json = serde_json::to_value(replay(&mut g, &[])).unwrap();
    assert_eq!(json["feedback"]["kind"], "prompt");
    assert_eq!(json["shape"], "circle");
}
