use super::*;

fn size(width: u32, height: u32) -> FrameSize {
    FrameSize { width, height }
}

#[test]
fn single_segment_descriptor_matches_grammar() {
    let desc = build_descriptor(
        size(720, 1280),
        Fps::new(30).unwrap(),
        &[(
            0,
            SegmentSpec {
                loop_count: 1,
                pause_ms: 0,
            },
        )],
    );
    assert_eq!(desc, "720 1280 30\np 1 0 part0\n");
}

#[test]
fn two_segment_descriptor_keeps_ascending_order() {
    let desc = build_descriptor(
        size(1080, 1920),
        Fps::new(24).unwrap(),
        &[
            (
                0,
                SegmentSpec {
                    loop_count: 0,
                    pause_ms: 0,
                },
            ),
            (
                1,
                SegmentSpec {
                    loop_count: 3,
                    pause_ms: 500,
                },
            ),
        ],
    );
    assert_eq!(desc, "1080 1920 24\np 0 0 part0\np 3 500 part1\n");
}

#[test]
fn part_index_follows_segment_index_not_position() {
    // Segment 0 dropped for having no valid frames: the surviving segment
    // keeps its own index in the part name.
    let desc = build_descriptor(
        size(100, 100),
        Fps::new(15).unwrap(),
        &[(2, SegmentSpec::default())],
    );
    assert_eq!(desc, "100 100 15\np 0 0 part2\n");
}
