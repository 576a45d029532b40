use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

fn script(json: &str) -> ScrollScript {
    ScrollScript::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn frame_count_covers_duration_inclusive() {
    let s = script(r#"{ "duration_ms": 1000 }"#);
    let frames = replay(PageDef::paris(), vp(), &s, 10.0).unwrap();
    assert_eq!(frames.len(), 11);
    assert_eq!(frames[0].time_ms, 0.0);
    assert_eq!(frames[10].time_ms, 1000.0);
}

#[test]
fn parses_tagged_inputs() {
    let s = script(
        r#"{
            "duration_ms": 100,
            "events": [
                { "at_ms": 0, "input": { "type": "wheel", "delta_y": 120 } },
                { "at_ms": 10, "input": { "type": "scroll_to", "offset": 50 } },
                { "at_ms": 20, "input": { "type": "scroll_to_entry", "id": 3, "immediate": true } },
                { "at_ms": 30, "input": { "type": "resize", "width": 640, "height": 480 } },
                { "at_ms": 40, "input": { "type": "unmount" } }
            ]
        }"#,
    );
    assert_eq!(s.events.len(), 5);
    assert_eq!(
        s.events[1].input,
        ScrollInput::ScrollTo {
            offset: 50.0,
            immediate: false
        }
    );
    assert_eq!(
        s.events[2].input,
        ScrollInput::ScrollToEntry {
            id: EntryId(3),
            immediate: true
        }
    );
    assert_eq!(s.events[4].input, ScrollInput::Unmount);
}

#[test]
fn immediate_jump_to_entry_selects_it() {
    let s = script(
        r#"{
            "duration_ms": 1500,
            "events": [
                { "at_ms": 0, "input": { "type": "scroll_to_entry", "id": 4, "immediate": true } }
            ]
        }"#,
    );
    let frames = replay(PageDef::paris(), vp(), &s, 60.0).unwrap();
    assert_eq!(frames[0].active, Some(EntryId(4)));
    let last = frames.last().unwrap();
    assert_eq!(last.background.to_hex(), "#72b7d4");
    assert_eq!(last.panels[3].opacity, 1.0);
}

#[test]
fn wheel_scrolls_smoothly_toward_target() {
    let s = script(
        r#"{
            "duration_ms": 3000,
            "events": [ { "at_ms": 100, "input": { "type": "wheel", "delta_y": 2000 } } ]
        }"#,
    );
    let frames = replay(PageDef::paris(), vp(), &s, 60.0).unwrap();
    assert_eq!(frames[5].scroll, 0.0);
    let scrolls: Vec<f64> = frames.iter().map(|f| f.scroll).collect();
    assert!(scrolls.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(frames.last().unwrap().scroll, 1000.0);
}

#[test]
fn events_are_applied_in_time_order() {
    let s = script(
        r#"{
            "duration_ms": 100,
            "events": [
                { "at_ms": 50, "input": { "type": "scroll_to", "offset": 300, "immediate": true } },
                { "at_ms": 0, "input": { "type": "scroll_to", "offset": 100, "immediate": true } }
            ]
        }"#,
    );
    let frames = replay(PageDef::paris(), vp(), &s, 20.0).unwrap();
    assert_eq!(frames[0].scroll, 100.0);
    assert_eq!(frames.last().unwrap().scroll, 300.0);
}

#[test]
fn rejects_bad_fps_and_bad_events() {
    let s = script(r#"{ "duration_ms": 100 }"#);
    assert!(replay(PageDef::paris(), vp(), &s, 0.0).is_err());

    let bad = script(
        r#"{ "duration_ms": 100, "events": [ { "at_ms": 0, "input": { "type": "resize", "width": 0, "height": 10 } } ] }"#,
    );
    assert!(matches!(bad.validate(), Err(StageError::Validation(_))));

    let unknown_entry = script(
        r#"{ "duration_ms": 100, "events": [ { "at_ms": 0, "input": { "type": "scroll_to_entry", "id": 99 } } ] }"#,
    );
    assert!(replay(PageDef::paris(), vp(), &unknown_entry, 30.0).is_err());
}

#[test]
fn malformed_script_is_a_serde_error() {
    let err = ScrollScript::from_reader("{ \"events\": [] }".as_bytes()).unwrap_err();
    assert!(matches!(err, StageError::Serde(_)));
}

#[test]
fn oversized_replay_is_rejected_not_run() {
    let huge = script(r#"{ "duration_ms": 1e300 }"#);
    assert!(matches!(
        replay(PageDef::paris(), vp(), &huge, 60.0),
        Err(StageError::Validation(_))
    ));

    let fast = script(r#"{ "duration_ms": 1000 }"#);
    assert!(replay(PageDef::paris(), vp(), &fast, 1e12).is_err());

    let small = script(r#"{ "duration_ms": 0 }"#);
    assert_eq!(replay(PageDef::paris(), vp(), &small, 60.0).unwrap().len(), 1);
}
