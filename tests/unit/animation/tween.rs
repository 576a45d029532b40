use super::*;

fn fade() -> Transition {
    Transition::new(500.0, Ease::Linear).with_delay(500.0)
}

#[test]
fn progress_respects_delay_and_duration() {
    let t = fade();
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(500.0), 0.0);
    assert_eq!(t.progress(750.0), 0.5);
    assert_eq!(t.progress(1000.0), 1.0);
    assert_eq!(t.progress(5000.0), 1.0);
    assert_eq!(t.total_ms(), 1000.0);
}

#[test]
fn zero_duration_completes_after_delay() {
    let t = Transition::instant().with_delay(10.0);
    assert_eq!(t.progress(5.0), 0.0);
    assert_eq!(t.progress(11.0), 1.0);
}

#[test]
fn validate_rejects_negative_timing() {
    assert!(Transition::new(-1.0, Ease::Linear).validate().is_err());
    assert!(fade().with_delay(f64::INFINITY).validate().is_err());
    assert!(fade().validate().is_ok());
}

#[test]
fn tween_moves_toward_target_and_settles() {
    let mut tw = Tween::settled(0.0);
    assert!(tw.retarget(1.0, Millis(0.0), fade()));
    assert_eq!(tw.sample(Millis(400.0)), 0.0);
    assert_eq!(tw.sample(Millis(750.0)), 0.5);
    assert!(!tw.is_settled(Millis(999.0)));
    assert!(tw.is_settled(Millis(1000.0)));
    assert_eq!(tw.sample(Millis(2000.0)), 1.0);
}

#[test]
fn retarget_to_same_value_is_noop() {
    let mut tw = Tween::settled(0.0);
    assert!(tw.retarget(1.0, Millis(0.0), fade()));
    assert!(!tw.retarget(1.0, Millis(600.0), fade()));
    // Timer was not restarted.
    assert_eq!(tw.sample(Millis(1000.0)), 1.0);
}

#[test]
fn interrupt_continues_from_visible_value() {
    let mut tw = Tween::settled(0.0);
    tw.retarget(1.0, Millis(0.0), Transition::new(100.0, Ease::Linear));
    tw.retarget(0.0, Millis(50.0), Transition::new(100.0, Ease::Linear));
    assert_eq!(tw.sample(Millis(50.0)), 0.5);
    assert_eq!(tw.sample(Millis(100.0)), 0.25);
    assert_eq!(*tw.target(), 0.0);
}

#[test]
fn color_lerp_rounds_per_channel() {
    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(255, 100, 1);
    assert_eq!(Rgba8::lerp(&a, &b, 0.5), Rgba8::rgb(128, 50, 1));
}

#[test]
fn jump_skips_transition() {
    let mut tw = Tween::settled(Rgba8::WHITE);
    tw.retarget(Rgba8::rgb(0, 0, 0), Millis(0.0), Transition::new(1000.0, Ease::Linear));
    tw.jump(Rgba8::rgb(1, 2, 3));
    assert_eq!(tw.sample(Millis(1.0)), Rgba8::rgb(1, 2, 3));
}
