use super::*;

fn circle() -> RangeMap {
    RangeMap::linear(1.0, 5000.0, 1.0, 10000.0).unwrap()
}

#[test]
fn clamps_at_domain_extremes() {
    let m = circle();
    assert_eq!(m.map(-250.0), 1.0);
    assert_eq!(m.map(1.0), 1.0);
    assert_eq!(m.map(5000.0), 10000.0);
    assert_eq!(m.map(123_456.0), 10000.0);
}

#[test]
fn domain_midpoint_maps_to_range_midpoint() {
    let m = circle();
    assert!((m.map(2500.5) - 5000.5).abs() < 1e-9);
}

#[test]
fn nan_maps_to_first_stop() {
    assert_eq!(circle().map(f64::NAN), 1.0);
}

#[test]
fn multi_stop_maps_each_segment() {
    let m = RangeMap::new(vec![0.0, 10.0, 20.0], vec![0.0, 100.0, 50.0]).unwrap();
    assert_eq!(m.map(5.0), 50.0);
    assert_eq!(m.map(10.0), 100.0);
    assert_eq!(m.map(15.0), 75.0);
}

#[test]
fn rejects_bad_stops() {
    assert!(RangeMap::new(vec![0.0], vec![1.0]).is_err());
    assert!(RangeMap::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(RangeMap::new(vec![1.0, 1.0], vec![0.0, 1.0]).is_err());
    assert!(RangeMap::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]).is_err());
}

#[test]
fn deserialize_validates() {
    let ok: RangeMap =
        serde_json::from_str(r#"{"domain":[1,5000],"range":[1,10000]}"#).unwrap();
    assert_eq!(ok, circle());
    assert!(serde_json::from_str::<RangeMap>(r#"{"domain":[5,1],"range":[1,2]}"#).is_err());
}
