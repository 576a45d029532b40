use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StageError::config("x").to_string().contains("config error:"));
    assert!(
        StageError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
