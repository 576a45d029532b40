use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

fn at(top: f64) -> Rect {
    Rect::new(0.0, top, 500.0, top + 100.0)
}

const OFF_BELOW: f64 = 2000.0;
const ON_BAND: f64 = 350.0;
const OFF_ABOVE: f64 = -2000.0;

fn tracker() -> ActiveTracker {
    ActiveTracker::new(
        SelectionStore::new(),
        [EntryId(1), EntryId(2)],
        RootMargin::center_band(),
    )
}

#[test]
fn sole_intersecting_entry_becomes_active() {
    let mut t = tracker();
    t.observe(&[at(ON_BAND), at(OFF_BELOW)], vp());
    assert_eq!(t.store().active(), Some(EntryId(1)));
    assert_eq!(t.intersecting(), vec![EntryId(1)]);
}

#[test]
fn leaving_the_band_clears_selection() {
    let mut t = tracker();
    t.observe(&[at(ON_BAND), at(OFF_BELOW)], vp());
    let crossings = t.observe(&[at(OFF_ABOVE), at(OFF_BELOW)], vp());
    assert_eq!(crossings, vec![(EntryId(1), Crossing::Exited)]);
    assert_eq!(t.store().active(), None);
}

#[test]
fn same_frame_exit_then_enter_selects_later_entry() {
    let mut t = tracker();
    t.observe(&[at(ON_BAND), at(OFF_BELOW)], vp());
    let crossings = t.observe(&[at(OFF_ABOVE), at(ON_BAND)], vp());
    assert_eq!(
        crossings,
        vec![(EntryId(1), Crossing::Exited), (EntryId(2), Crossing::Entered)]
    );
    assert_eq!(t.store().active(), Some(EntryId(2)));
}

#[test]
fn later_exit_clears_earlier_entry_in_same_frame() {
    let mut t = tracker();
    t.observe(&[at(OFF_BELOW), at(ON_BAND)], vp());
    assert_eq!(t.store().active(), Some(EntryId(2)));
    // Entry 1 jumps onto the band while entry 2 leaves it: entry 2's exit is dispatched last.
    t.observe(&[at(ON_BAND), at(OFF_ABOVE)], vp());
    assert_eq!(t.store().active(), None);
    assert_eq!(t.intersecting(), vec![EntryId(1)]);
}

#[test]
fn no_crossing_means_no_write() {
    let mut t = tracker();
    t.observe(&[at(OFF_BELOW), at(OFF_BELOW)], vp());
    assert_eq!(t.store().writes(), 0);
}
