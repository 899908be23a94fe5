use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BootanimError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BootanimError::archive_write("x")
            .to_string()
            .contains("archive write failed:")
    );
    assert!(
        BootanimError::NoValidFrames
            .to_string()
            .contains("no valid frames")
    );
    assert!(
        BootanimError::NoSegmentsProduced
            .to_string()
            .contains("no segments produced")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BootanimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
