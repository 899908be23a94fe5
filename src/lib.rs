//! Bootanim packages an ordered sequence of still images into an Android
//! boot-animation archive.
//!
//! The pipeline has two stages, consumed in order:
//!
//! - [`assemble()`](crate::assemble::frames::assemble) normalizes the flat
//!   image list into per-segment frame sequences, re-encoding each frame into
//!   an archive-safe format under canonical `part<N>/<seq>` names.
//! - [`pack`](crate::archive::pack::pack) derives the `desc.txt` descriptor
//!   and emits a single store-only ZIP container.
//!
//! [`run_plan`] runs both stages against a scratch workspace that is removed
//! on every exit path; [`Job::spawn`] runs the same pipeline on a worker
//! thread and streams progress/terminal events back to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Descriptor derivation and ZIP emission.
pub mod archive;
/// Frame re-encoding and per-segment sequencing.
pub mod assemble;
mod foundation;
/// Job orchestration and progress reporting.
pub mod pipeline;
/// Boundary data model and JSON manifest loading.
pub mod plan;

pub use crate::foundation::core::{Fps, FrameSize};
pub use crate::foundation::error::{BootanimError, BootanimResult};

pub use crate::archive::descriptor::build_descriptor;
pub use crate::archive::pack::pack;
pub use crate::assemble::frames::{AssembledFrame, AssembledSegments, assemble};
pub use crate::pipeline::job::{Job, JobEvent, JobHandle, ProgressTracker, run_plan, run_plan_in};
pub use crate::plan::model::{AnimationPlan, ImageRecord, MAX_SEGMENTS, SegmentSpec, SourceFormat};
