use std::fmt::Write as _;

use crate::foundation::core::{Fps, FrameSize};
use crate::plan::model::SegmentSpec;

/// Root-level archive entry name consumed by the playback engine.
pub const DESC_FILE_NAME: &str = "desc.txt";

/// Derive the `desc.txt` descriptor text.
///
/// Line 1 is `"<width> <height> <fps>"`. Each surviving segment contributes
/// one `"p <loop> <pause> part<index>"` line; `parts` must already be in
/// ascending segment-index order. Lines are `\n`-separated with a trailing
/// newline.
pub fn build_descriptor(size: FrameSize, fps: Fps, parts: &[(u32, SegmentSpec)]) -> String {
    let mut desc = format!("{} {} {}\n", size.width, size.height, fps.get());
    for (index, spec) in parts {
        let _ = writeln!(
            desc,
            "p {} {} part{index}",
            spec.loop_count, spec.pause_ms
        );
    }
    desc
}

#[cfg(test)]
#[path = "../../tests/unit/archive/descriptor.rs"]
mod tests;
