use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#c4ab95")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xc4, 0xab, 0x95));

    let c: Rgba8 = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
}

#[test]
fn parses_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.5})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 128));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(c.a, 0);

    assert!(serde_json::from_value::<Rgba8>(json!([0.0, 1.0])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("#ééé").is_err());
}

#[test]
fn serializes_as_lowercase_hex() {
    let v = serde_json::to_value(Rgba8::rgb(0x4F, 0x69, 0x6D)).unwrap();
    assert_eq!(v, json!("#4f696d"));
    let translucent = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 16,
    };
    assert_eq!(translucent.to_hex(), "#00000010");
}
