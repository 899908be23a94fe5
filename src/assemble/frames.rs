use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{DynamicImage, GenericImageView as _, ImageFormat, RgbImage};

use crate::foundation::core::FrameSize;
use crate::foundation::error::{BootanimError, BootanimResult};
use crate::pipeline::job::ProgressTracker;
use crate::plan::model::{AnimationPlan, SourceFormat};

/// Fixed JPEG re-encode quality.
pub const JPEG_QUALITY: u8 = 95;

/// Share of total job progress consumed by frame assembly.
const ASSEMBLY_PROGRESS_BUDGET: u32 = 80;

/// One re-encoded frame staged in the scratch workspace.
#[derive(Clone, Debug)]
pub struct AssembledFrame {
    /// Canonical archive file name (`00000.png`, `00001.jpg`, ...).
    pub file_name: String,
    /// Staged frame location inside the scratch workspace.
    pub path: PathBuf,
}

/// Result of segment assembly: surviving segments in ascending index order
/// plus the archive dimensions.
#[derive(Debug)]
pub struct AssembledSegments {
    /// Surviving segments, each with its frames in sequence order. Segments
    /// with zero successfully processed frames are absent.
    pub segments: BTreeMap<u32, Vec<AssembledFrame>>,
    /// Dimensions of the first input-order frame that decoded successfully.
    pub size: FrameSize,
}

impl AssembledSegments {
    /// Total number of staged frames across all segments.
    pub fn frame_count(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }
}

/// Normalize the plan's flat image list into per-segment frame sequences.
///
/// Records are processed strictly in input order. The first record that
/// decodes supplies the archive dimensions for the whole animation: whichever
/// image appears first in the caller's list, not segment 0 specifically. Each
/// frame is re-encoded into `scratch/part<N>/` under a zero-padded 5-digit
/// sequence name scoped to its segment; a record whose source is missing or
/// undecodable is skipped with a warning and consumes no sequence number.
///
/// Fails with [`BootanimError::NoValidFrames`] when no record decodes at all.
/// Emits per-frame progress in `0..=80`.
pub fn assemble(
    plan: &AnimationPlan,
    scratch: &Path,
    progress: &mut ProgressTracker<'_>,
) -> BootanimResult<AssembledSegments> {
    let total = plan.records().len() as u32;
    let mut segments: BTreeMap<u32, Vec<AssembledFrame>> = BTreeMap::new();
    let mut size: Option<FrameSize> = None;

    for (attempted, record) in plan.records().iter().enumerate() {
        match image::open(&record.path) {
            Ok(img) => {
                let (width, height) = img.dimensions();
                size.get_or_insert(FrameSize { width, height });

                let frames = segments.entry(record.segment).or_default();
                let seq = frames.len() as u32;
                let file_name = format!("{seq:05}.{}", record.format.output_extension());
                let path = stage_frame(scratch, record.segment, &file_name, record.format, &img)?;
                frames.push(AssembledFrame { file_name, path });
            }
            Err(e) => {
                tracing::warn!(
                    path = %record.path.display(),
                    error = %e,
                    "skipping frame: source could not be decoded"
                );
            }
        }

        progress.emit((attempted as u32 + 1) * ASSEMBLY_PROGRESS_BUDGET / total);
    }

    let Some(size) = size else {
        return Err(BootanimError::NoValidFrames);
    };

    tracing::debug!(
        segments = segments.len(),
        frames = segments.values().map(Vec::len).sum::<usize>(),
        width = size.width,
        height = size.height,
        "segment assembly complete"
    );

    Ok(AssembledSegments { segments, size })
}

/// Re-encode one decoded frame into the scratch workspace.
///
/// Unlike a source decode failure, a failure to write into the scratch
/// workspace is a job-level IO error and aborts the run.
fn stage_frame(
    scratch: &Path,
    segment: u32,
    file_name: &str,
    format: SourceFormat,
    img: &DynamicImage,
) -> BootanimResult<PathBuf> {
    let part_dir = scratch.join(format!("part{segment}"));
    std::fs::create_dir_all(&part_dir)
        .with_context(|| format!("create scratch dir '{}'", part_dir.display()))?;
    let path = part_dir.join(file_name);

    match format {
        // PNG keeps the source channel mode; alpha is preserved.
        SourceFormat::Png | SourceFormat::Other => {
            img.save_with_format(&path, ImageFormat::Png)
                .with_context(|| format!("re-encode '{}' as png", path.display()))?;
        }
        SourceFormat::Jpeg => {
            // JPEG carries no alpha: flatten transparent sources onto an
            // opaque white background before encoding.
            let rgb = if img.color().has_alpha() {
                flatten_onto_white(img)
            } else {
                img.to_rgb8()
            };
            let mut file = File::create(&path)
                .with_context(|| format!("create frame file '{}'", path.display()))?;
            let mut enc = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut file, JPEG_QUALITY);
            enc.encode_image(&rgb)
                .with_context(|| format!("re-encode '{}' as jpeg", path.display()))?;
        }
    }

    Ok(path)
}

/// Composite straight-alpha RGBA onto an opaque white background.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut out = RgbImage::new(width, height);
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let a = u16::from(src.0[3]);
        let inv = 255 - a;
        for c in 0..3 {
            dst.0[c] = ((u16::from(src.0[c]) * a + 255 * inv + 127) / 255).min(255) as u8;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/frames.rs"]
mod tests;
