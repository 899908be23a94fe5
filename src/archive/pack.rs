use std::fs::File;
use std::io::{self, Write as _};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::archive::descriptor::{DESC_FILE_NAME, build_descriptor};
use crate::assemble::frames::AssembledSegments;
use crate::foundation::error::{BootanimError, BootanimResult};
use crate::pipeline::job::ProgressTracker;
use crate::plan::model::AnimationPlan;

/// Emit the final archive at the plan's output path.
///
/// The container is a ZIP with store-only entries (the playback engine does
/// not support compressed entries): `desc.txt` at the root, then every staged
/// frame under `part<segment_index>/` in per-segment ascending sequence
/// order. The archive is written to a temporary file next to the destination
/// and persisted atomically, so a failing job never leaves a partial file.
///
/// Fails with [`BootanimError::NoSegmentsProduced`] when no segment survived
/// assembly and [`BootanimError::ArchiveWrite`] on any IO failure.
pub fn pack(
    plan: &AnimationPlan,
    assembled: &AssembledSegments,
    progress: &mut ProgressTracker<'_>,
) -> BootanimResult<()> {
    if assembled.segments.is_empty() {
        return Err(BootanimError::NoSegmentsProduced);
    }

    let parts: Vec<_> = assembled
        .segments
        .keys()
        .map(|&index| (index, plan.segment_spec(index)))
        .collect();
    let desc = build_descriptor(assembled.size, plan.fps(), &parts);

    let out_path = plan.output();
    let out_dir = match out_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => std::path::Path::new("."),
    };
    std::fs::create_dir_all(out_dir).map_err(|e| {
        BootanimError::archive_write(format!(
            "create output directory '{}': {e}",
            out_dir.display()
        ))
    })?;

    // Unfinished temp files are deleted on drop, which covers every error
    // path below.
    let tmp = NamedTempFile::new_in(out_dir).map_err(|e| {
        BootanimError::archive_write(format!(
            "create temp archive in '{}': {e}",
            out_dir.display()
        ))
    })?;

    let mut zip = ZipWriter::new(tmp.as_file());

    zip.start_file(DESC_FILE_NAME, stored_entry())
        .map_err(|e| BootanimError::archive_write(format!("start '{DESC_FILE_NAME}' entry: {e}")))?;
    zip.write_all(desc.as_bytes())
        .map_err(|e| BootanimError::archive_write(format!("write '{DESC_FILE_NAME}': {e}")))?;
    progress.emit(90);

    for (index, frames) in &assembled.segments {
        for frame in frames {
            let entry = format!("part{index}/{}", frame.file_name);
            zip.start_file(entry.as_str(), stored_entry())
                .map_err(|e| BootanimError::archive_write(format!("start '{entry}' entry: {e}")))?;
            let mut src = File::open(&frame.path).map_err(|e| {
                BootanimError::archive_write(format!(
                    "open staged frame '{}': {e}",
                    frame.path.display()
                ))
            })?;
            io::copy(&mut src, &mut zip)
                .map_err(|e| BootanimError::archive_write(format!("write '{entry}': {e}")))?;
        }
    }

    zip.finish()
        .map_err(|e| BootanimError::archive_write(format!("finalize archive: {e}")))?;

    tmp.persist(out_path).map_err(|e| {
        BootanimError::archive_write(format!("persist archive to '{}': {e}", out_path.display()))
    })?;
    progress.emit(100);

    tracing::debug!(path = %out_path.display(), "archive written");
    Ok(())
}

/// Store-only entry options; the playback format rejects deflated entries.
fn stored_entry() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
}
