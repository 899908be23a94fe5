use super::*;

use crate::foundation::error::BootanimError;

fn record(path: &str, segment: u32) -> ImageRecord {
    ImageRecord::from_path(path, segment)
}

#[test]
fn source_format_from_extension_is_case_insensitive() {
    assert_eq!(
        SourceFormat::from_path(Path::new("a/b/frame.PNG")),
        SourceFormat::Png
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("frame.jpg")),
        SourceFormat::Jpeg
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("frame.JPEG")),
        SourceFormat::Jpeg
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("frame.webp")),
        SourceFormat::Other
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("no_extension")),
        SourceFormat::Other
    );
}

#[test]
fn output_extension_normalizes_to_png_or_jpg() {
    assert_eq!(SourceFormat::Png.output_extension(), "png");
    assert_eq!(SourceFormat::Jpeg.output_extension(), "jpg");
    assert_eq!(SourceFormat::Other.output_extension(), "png");
}

#[test]
fn plan_rejects_empty_image_list() {
    let err = AnimationPlan::new(vec![], vec![], Fps::new(30).unwrap(), "out.zip").unwrap_err();
    assert!(matches!(err, BootanimError::Validation(_)));
}

#[test]
fn plan_rejects_out_of_range_segment_index() {
    let err = AnimationPlan::new(
        vec![record("a.png", MAX_SEGMENTS)],
        vec![],
        Fps::new(30).unwrap(),
        "out.zip",
    )
    .unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn plan_rejects_too_many_segment_specs() {
    let specs = vec![SegmentSpec::default(); MAX_SEGMENTS as usize + 1];
    let err = AnimationPlan::new(
        vec![record("a.png", 0)],
        specs,
        Fps::new(30).unwrap(),
        "out.zip",
    )
    .unwrap_err();
    assert!(matches!(err, BootanimError::Validation(_)));
}

#[test]
fn segment_spec_falls_back_to_defaults_when_missing() {
    let plan = AnimationPlan::new(
        vec![record("a.png", 0), record("b.png", 2)],
        vec![SegmentSpec {
            loop_count: 3,
            pause_ms: 500,
        }],
        Fps::new(30).unwrap(),
        "out.zip",
    )
    .unwrap();

    assert_eq!(plan.segment_spec(0).loop_count, 3);
    assert_eq!(plan.segment_spec(0).pause_ms, 500);
    assert_eq!(plan.segment_spec(2), SegmentSpec::default());
}

#[test]
fn manifest_derives_format_and_defaults_segment() {
    let manifest = r#"{
        "fps": 24,
        "output": "boot.zip",
        "segments": [{ "loop_count": 1 }],
        "images": [
            { "path": "frames/a.png" },
            { "path": "frames/b.jpeg", "segment": 1 },
            { "path": "frames/c.bin", "format": "jpg", "segment": 1 }
        ]
    }"#;

    let plan = AnimationPlan::from_reader(manifest.as_bytes()).unwrap();
    assert_eq!(plan.fps().get(), 24);
    assert_eq!(plan.output(), Path::new("boot.zip"));

    let records = plan.records();
    assert_eq!(records[0].format, SourceFormat::Png);
    assert_eq!(records[0].segment, 0);
    assert_eq!(records[1].format, SourceFormat::Jpeg);
    assert_eq!(records[1].segment, 1);
    // Explicit format wins over the extension.
    assert_eq!(records[2].format, SourceFormat::Jpeg);
}

#[test]
fn manifest_with_no_images_fails_validation() {
    let manifest = r#"{ "fps": 30, "output": "boot.zip", "images": [] }"#;
    let err = AnimationPlan::from_reader(manifest.as_bytes()).unwrap_err();
    assert!(matches!(err, BootanimError::Validation(_)));
}

#[test]
fn with_output_replaces_destination() {
    let plan = AnimationPlan::new(
        vec![record("a.png", 0)],
        vec![],
        Fps::new(30).unwrap(),
        "out.zip",
    )
    .unwrap()
    .with_output("elsewhere.zip");
    assert_eq!(plan.output(), Path::new("elsewhere.zip"));
}
