use super::*;

#[test]
fn fps_accepts_playback_range() {
    assert_eq!(Fps::new(1).unwrap().get(), 1);
    assert_eq!(Fps::new(30).unwrap().get(), 30);
    assert_eq!(Fps::new(60).unwrap().get(), 60);
}

#[test]
fn fps_rejects_zero_and_above_max() {
    assert!(Fps::new(0).is_err());
    assert!(Fps::new(61).is_err());
}

#[test]
fn fps_deserializes_with_validation() {
    let fps: Fps = serde_json::from_str("24").unwrap();
    assert_eq!(fps.get(), 24);
    assert!(serde_json::from_str::<Fps>("0").is_err());
    assert!(serde_json::from_str::<Fps>("120").is_err());
}

#[test]
fn fps_serializes_as_plain_integer() {
    let fps = Fps::new(30).unwrap();
    assert_eq!(serde_json::to_string(&fps).unwrap(), "30");
}
