use super::*;

fn finished(completion: Completion, score: Option<u8>) -> Session {
    let mut s = Session::new();
    assert!(s.begin());
    assert!(s.finish(completion, score));
    s
}

#[test]
fn new_session_is_idle_and_empty() {
    let s = Session::new();
    assert_eq!(s.status(), GameStatus::Idle);
    assert_eq!(s.completion(), None);
    assert_eq!(s.score(), None);
}

#[test]
fn begin_moves_idle_to_drawing() {
    let mut s = Session::new();
    assert!(s.begin());
    assert!(s.is_drawing());
    assert_eq!(s.completion(), None);
}

#[test]
fn begin_while_drawing_is_ignored() {
    let mut s = Session::new();
    s.begin();
    s.publish_score(Some(42));
    assert!(!s.begin());
    assert!(s.is_drawing());
    assert_eq!(s.score(), Some(42));
}

#[test]
fn begin_while_finished_is_ignored() {
    let mut s = finished(Completion::Success, Some(90));
    assert!(!s.begin());
    assert!(s.is_finished());
}

#[test]
fn publish_score_only_while_drawing() {
    let mut s = Session::new();
    s.publish_score(Some(10));
    assert_eq!(s.score(), None);

    s.begin();
    s.publish_score(Some(77));
    assert_eq!(s.score(), Some(77));
    s.publish_score(None);
    assert_eq!(s.score(), None);
}

#[test]
fn finish_records_classification_and_score() {
    let s = finished(Completion::Close, Some(64));
    assert_eq!(s.status(), GameStatus::Finished);
    assert_eq!(s.completion(), Some(Completion::Close));
    assert_eq!(s.score(), Some(64));
}

#[test]
fn finish_from_idle_is_ignored() {
    let mut s = Session::new();
    assert!(!s.finish(Completion::Success, Some(100)));
    assert_eq!(s.status(), GameStatus::Idle);
    assert_eq!(s.completion(), None);
}

#[test]
fn score_is_frozen_once_finished() {
    let mut s = finished(Completion::Success, Some(88));
    s.publish_score(Some(12));
    assert!(!s.finish(Completion::Incomplete, None));
    assert_eq!(s.score(), Some(88));
    assert_eq!(s.completion(), Some(Completion::Success));
}

#[test]
fn reset_clears_everything() {
    let mut s = finished(Completion::Incomplete, Some(30));
    assert!(s.reset());
    assert_eq!(s.status(), GameStatus::Idle);
    assert_eq!(s.completion(), None);
    assert_eq!(s.score(), None);
}

#[test]
fn reset_only_from_finished() {
    let mut s = Session::new();
    assert!(!s.reset());
    s.begin();
    s.publish_score(Some(50));
    assert!(!s.reset());
    assert!(s.is_drawing());
    assert_eq!(s.score(), Some(50));
}

#[test]
fn full_cycle_repeats() {
    let mut s = Session::new();
    for _ in 0..3 {
        assert!(s.begin());
        assert!(s.finish(Completion::Success, Some(99)));
        assert!(s.reset());
    }
    assert_eq!(s.status(), GameStatus::Idle);
}

#[test]
fn statuses_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&GameStatus::Drawing).unwrap(), "\"drawing\"");
    assert_eq!(serde_json::to_string(&Completion::Close).unwrap(), "\"close\"");
}
