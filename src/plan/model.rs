use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::foundation::error::{BootanimError, BootanimResult};

/// Maximum number of independently configured segments.
pub const MAX_SEGMENTS: u32 = 8;

/// Cached source encoding of an input image.
///
/// Drives the re-encode path: PNG stays PNG, JPEG stays JPEG, anything else
/// is normalized to PNG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// PNG source, re-saved as PNG with the channel mode preserved.
    Png,
    /// JPEG source, re-saved as JPEG at fixed high quality.
    #[serde(alias = "jpg")]
    Jpeg,
    /// Any other encoding, normalized to PNG on output.
    #[default]
    Other,
}

impl SourceFormat {
    /// Derive the source format from a path extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Other,
        }
    }

    /// File extension used for the re-encoded frame in the archive.
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png | Self::Other => "png",
        }
    }
}

/// One input frame: source location, cached encoding, assigned segment.
///
/// Records are owned by the caller and immutable once the plan is built; a
/// record whose source is missing or undecodable is a per-frame failure, not
/// a fatal one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    /// Source image path.
    pub path: PathBuf,
    /// Cached source encoding.
    pub format: SourceFormat,
    /// 0-based segment index, `< MAX_SEGMENTS`.
    pub segment: u32,
}

impl ImageRecord {
    /// Create a record with the format derived from the path extension.
    pub fn from_path(path: impl Into<PathBuf>, segment: u32) -> Self {
        let path = path.into();
        let format = SourceFormat::from_path(&path);
        Self {
            path,
            format,
            segment,
        }
    }
}

/// Playback parameters for one animation segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// Times the segment repeats; 0 means infinite.
    #[serde(default)]
    pub loop_count: u32,
    /// Delay in milliseconds before the segment starts playing.
    #[serde(default)]
    pub pause_ms: u32,
}

/// A whole packaging job: ordered records, index-aligned segment specs,
/// global frame rate, and the output destination.
///
/// Validated at construction and never mutated afterwards; constructed per
/// invocation and discarded once the archive is produced or the job fails.
#[derive(Clone, Debug)]
pub struct AnimationPlan {
    records: Vec<ImageRecord>,
    segments: Vec<SegmentSpec>,
    fps: Fps,
    output: PathBuf,
}

/// JSON-facing manifest shape, resolved into an [`AnimationPlan`].
#[derive(Debug, Deserialize)]
struct PlanDef {
    fps: Fps,
    output: PathBuf,
    #[serde(default)]
    segments: Vec<SegmentSpec>,
    images: Vec<ImageDef>,
}

#[derive(Debug, Deserialize)]
struct ImageDef {
    path: PathBuf,
    #[serde(default)]
    format: Option<SourceFormat>,
    #[serde(default)]
    segment: u32,
}

impl AnimationPlan {
    /// Build a validated plan.
    ///
    /// Rejects an empty image list and any segment index `>= MAX_SEGMENTS`.
    pub fn new(
        records: Vec<ImageRecord>,
        segments: Vec<SegmentSpec>,
        fps: Fps,
        output: impl Into<PathBuf>,
    ) -> BootanimResult<Self> {
        if records.is_empty() {
            return Err(BootanimError::validation("plan contains no images"));
        }
        if let Some(rec) = records.iter().find(|r| r.segment >= MAX_SEGMENTS) {
            return Err(BootanimError::validation(format!(
                "segment index {} out of range (max {}) for '{}'",
                rec.segment,
                MAX_SEGMENTS - 1,
                rec.path.display()
            )));
        }
        if segments.len() as u32 > MAX_SEGMENTS {
            return Err(BootanimError::validation(format!(
                "at most {MAX_SEGMENTS} segment specs are allowed, got {}",
                segments.len()
            )));
        }
        Ok(Self {
            records,
            segments,
            fps,
            output: output.into(),
        })
    }

    /// Parse a plan manifest from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BootanimResult<Self> {
        let def: PlanDef = serde_json::from_reader(r)
            .map_err(|e| BootanimError::validation(format!("parse plan manifest JSON: {e}")))?;
        let records = def
            .images
            .into_iter()
            .map(|img| {
                let format = img
                    .format
                    .unwrap_or_else(|| SourceFormat::from_path(&img.path));
                ImageRecord {
                    path: img.path,
                    format,
                    segment: img.segment,
                }
            })
            .collect();
        Self::new(records, def.segments, def.fps, def.output)
    }

    /// Parse a plan manifest from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BootanimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BootanimError::validation(format!("open plan manifest '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Ordered input records.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Playback spec for `segment`, or the `{loop:0, pause:0}` fallback when
    /// no spec exists at that index.
    pub fn segment_spec(&self, segment: u32) -> SegmentSpec {
        self.segments
            .get(segment as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Global frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output archive path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Return a copy of the plan with a different output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/model.rs"]
mod tests;
