use super::*;

fn engine() -> SmoothScroll {
    SmoothScroll::new(SmoothScrollConfig::default(), 10_000.0).unwrap()
}

fn run_frames(s: &mut SmoothScroll, start_ms: f64, frames: usize) -> Vec<ScrollEvent> {
    (0..frames)
        .filter_map(|i| s.raf(Millis(start_ms + i as f64 * 16.0)))
        .collect()
}

#[test]
fn default_config_matches_page_setup() {
    let c = SmoothScrollConfig::default();
    assert_eq!(c.lerp, Some(0.1));
    assert_eq!(c.wheel_multiplier, 0.5);
    assert_eq!(c.easing, Ease::InCubic);
    assert!(c.validate().is_ok());
}

#[test]
fn config_validation_rejects_bad_values() {
    let mut c = SmoothScrollConfig::default();
    c.lerp = Some(0.0);
    assert!(c.validate().is_err());

    let mut c = SmoothScrollConfig::default();
    c.lerp = None;
    c.duration_s = 0.0;
    assert!(c.validate().is_err());

    let mut c = SmoothScrollConfig::default();
    c.wheel_multiplier = f64::NAN;
    assert!(c.validate().is_err());

    assert!(SmoothScroll::new(SmoothScrollConfig::default(), -1.0).is_err());
}

#[test]
fn idle_engine_emits_nothing() {
    let mut s = engine();
    assert!(s.raf(Millis(0.0)).is_none());
    assert!(s.raf(Millis(16.0)).is_none());
}

#[test]
fn wheel_applies_multiplier_and_damps_toward_target() {
    let mut s = engine();
    s.on_wheel(200.0);
    assert_eq!(s.target(), 100.0);

    let events = run_frames(&mut s, 0.0, 400);
    assert!(!events.is_empty());
    // Monotonic approach, never overshooting.
    for w in events.windows(2) {
        assert!(w[1].scroll >= w[0].scroll);
        assert!(w[1].scroll <= 100.0);
    }
    let last = events.last().unwrap();
    assert_eq!(last.scroll, 100.0);
    assert!(!last.is_scrolling);
    assert!(!s.is_scrolling());
}

#[test]
fn events_carry_animation_start_offset() {
    let mut s = engine();
    s.on_wheel(1000.0);
    let events = run_frames(&mut s, 0.0, 20);
    assert!(events.iter().all(|e| e.animate.from == 0.0));
    let mid = s.scroll();
    assert!(mid > 0.0 && mid < 500.0);

    // A new input restarts the animation from the current eased position.
    s.on_wheel(1000.0);
    let e = s.raf(Millis(20.0 * 16.0)).unwrap();
    assert_eq!(e.animate.from, mid);
    assert_eq!(e.animate.to, 1000.0);
}

#[test]
fn target_is_clamped_to_limit() {
    let mut s = SmoothScroll::new(SmoothScrollConfig::default(), 300.0).unwrap();
    s.on_wheel(10_000.0);
    assert_eq!(s.target(), 300.0);
    s.on_wheel(-100_000.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn immediate_scroll_to_jumps() {
    let mut s = engine();
    let e = s.scroll_to(1234.0, true).unwrap();
    assert_eq!(e.scroll, 1234.0);
    assert_eq!(s.target(), 1234.0);
    assert!(!e.is_scrolling);
    assert!(s.raf(Millis(0.0)).is_none());
}

#[test]
fn timed_mode_uses_easing_over_duration() {
    let cfg = SmoothScrollConfig {
        easing: Ease::Linear,
        duration_s: 1.0,
        lerp: None,
        ..SmoothScrollConfig::default()
    };
    let mut s = SmoothScroll::new(cfg, 1000.0).unwrap();
    assert!(s.scroll_to(800.0, false).is_none());
    s.raf(Millis(0.0));
    let half = s.raf(Millis(500.0)).unwrap();
    assert_eq!(half.scroll, 400.0);
    assert_eq!(half.direction, 1);
    let done = s.raf(Millis(1000.0)).unwrap();
    assert_eq!(done.scroll, 800.0);
    assert!(!done.is_scrolling);
}

#[test]
fn forget_time_prevents_large_jumps() {
    let cfg = SmoothScrollConfig {
        easing: Ease::Linear,
        duration_s: 1.0,
        lerp: None,
        ..SmoothScrollConfig::default()
    };
    let mut s = SmoothScroll::new(cfg, 1000.0).unwrap();
    s.scroll_to(1000.0, false);
    s.raf(Millis(0.0));
    s.forget_time();
    let e = s.raf(Millis(60_000.0)).unwrap();
    assert_eq!(e.scroll, 0.0);
}

#[test]
fn set_limit_reclamps_position() {
    let mut s = engine();
    s.scroll_to(5000.0, true);
    s.set_limit(2000.0);
    assert_eq!(s.scroll(), 2000.0);
    assert_eq!(s.target(), 2000.0);
    assert_eq!(s.limit(), 2000.0);
}

#[test]
fn zero_limit_reports_full_progress() {
    let mut s = SmoothScroll::new(SmoothScrollConfig::default(), 0.0).unwrap();
    let e = s.scroll_to(10.0, true).unwrap();
    assert_eq!(e.scroll, 0.0);
    assert_eq!(e.progress, 1.0);
}

#[test]
fn shrinking_limit_mid_scroll_retargets_the_animation() {
    let mut s = engine();
    s.on_wheel(10_000.0);
    assert_eq!(s.target(), 5000.0);
    s.raf(Millis(0.0));
    s.raf(Millis(16.0));
    assert!(s.is_scrolling());

    s.set_limit(1000.0);
    let events = run_frames(&mut s, 32.0, 400);
    assert!(events.iter().all(|e| e.scroll <= 1000.0));
    assert_eq!(s.scroll(), 1000.0);
    assert_eq!(s.target(), 1000.0);
    assert!(!s.is_scrolling());
}

#[test]
fn shrinking_limit_mid_timed_scroll_stays_in_bounds() {
    let cfg = SmoothScrollConfig {
        easing: Ease::Linear,
        duration_s: 1.0,
        lerp: None,
        ..SmoothScrollConfig::default()
    };
    let mut s = SmoothScroll::new(cfg, 4000.0).unwrap();
    s.scroll_to(4000.0, false);
    s.raf(Millis(0.0));
    let before = s.raf(Millis(100.0)).unwrap().scroll;
    assert!(before > 0.0 && before < 1000.0);

    s.set_limit(1000.0);
    let events = run_frames(&mut s, 116.0, 100);
    assert!(events.iter().all(|e| e.scroll <= 1000.0 && e.scroll >= before));
    assert_eq!(s.scroll(), 1000.0);
}
