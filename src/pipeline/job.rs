use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Context as _;

use crate::archive::pack::pack;
use crate::assemble::frames::assemble;
use crate::foundation::error::BootanimResult;
use crate::plan::model::AnimationPlan;

/// Monotonic 0–100 progress reporter.
///
/// Checkpoints may be computed out of strict order by callers with integer
/// rounding; the tracker forwards only strictly increasing values so the
/// observed sequence never decreases.
pub struct ProgressTracker<'a> {
    last: u8,
    sink: &'a mut dyn FnMut(u8),
}

impl<'a> ProgressTracker<'a> {
    /// Create a tracker forwarding into `sink`, starting at 0.
    pub fn new(sink: &'a mut dyn FnMut(u8)) -> Self {
        Self { last: 0, sink }
    }

    /// Report a checkpoint; values `> 100` are clamped, non-increasing values
    /// are dropped.
    pub fn emit(&mut self, pct: u32) {
        let pct = pct.min(100) as u8;
        if pct > self.last {
            self.last = pct;
            (self.sink)(pct);
        }
    }

    /// Last value forwarded to the sink.
    pub fn last(&self) -> u8 {
        self.last
    }
}

/// Run the whole pipeline synchronously: scratch workspace, assembly, packing.
///
/// The scratch workspace is a unique per-job temporary directory under the
/// system temp dir, removed on success, failure, and unwind alike; concurrent
/// jobs never share one. Returns the output archive path.
pub fn run_plan(plan: &AnimationPlan, on_progress: impl FnMut(u8)) -> BootanimResult<PathBuf> {
    run_plan_in(plan, &std::env::temp_dir(), on_progress)
}

/// [`run_plan`] with the scratch workspace created under `scratch_root`
/// instead of the system temp dir.
///
/// Useful when staged frames should stay on the same filesystem as the
/// output; the cleanup guarantees are identical.
pub fn run_plan_in(
    plan: &AnimationPlan,
    scratch_root: &Path,
    mut on_progress: impl FnMut(u8),
) -> BootanimResult<PathBuf> {
    let mut progress = ProgressTracker::new(&mut on_progress);

    let scratch = tempfile::Builder::new()
        .prefix("bootanim-")
        .tempdir_in(scratch_root)
        .context("create scratch workspace")?;

    let assembled = assemble(plan, scratch.path(), &mut progress)?;
    pack(plan, &assembled, &mut progress)?;

    Ok(plan.output().to_path_buf())
    // `scratch` drops here, removing the workspace on every exit path.
}

/// Event stream emitted by a background job.
///
/// A job emits zero or more `Progress` events (monotonically non-decreasing)
/// followed by exactly one terminal `Finished` or `Failed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobEvent {
    /// Pipeline progress, 0–100.
    Progress(u8),
    /// Terminal success with a human-readable message.
    Finished(String),
    /// Terminal failure with a human-readable error description.
    Failed(String),
}

/// Background packaging job.
///
/// Frame re-encoding and archive writing run on a worker thread so they never
/// block an interactive caller. There is no cancellation: once started, the
/// job runs to completion or failure.
pub struct Job;

impl Job {
    /// Run `plan` on a worker thread, streaming [`JobEvent`]s to the handle.
    pub fn spawn(plan: AnimationPlan) -> JobHandle {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            let progress_tx = tx.clone();
            let result = run_plan(&plan, move |pct| {
                let _ = progress_tx.send(JobEvent::Progress(pct));
            });
            let terminal = match result {
                Ok(path) => {
                    JobEvent::Finished(format!("animation written to '{}'", path.display()))
                }
                Err(e) => JobEvent::Failed(e.to_string()),
            };
            // The receiver may already be gone; the job result is final
            // either way.
            let _ = tx.send(terminal);
        });
        JobHandle { events: rx, worker }
    }
}

/// Receiving side of a spawned [`Job`].
pub struct JobHandle {
    events: mpsc::Receiver<JobEvent>,
    worker: thread::JoinHandle<()>,
}

impl JobHandle {
    /// Blocking iterator over job events, ending after the terminal event.
    pub fn events(&self) -> mpsc::Iter<'_, JobEvent> {
        self.events.iter()
    }

    /// Wait for the worker thread to exit.
    pub fn join(self) -> BootanimResult<()> {
        self.worker
            .join()
            .map_err(|_| anyhow::anyhow!("job worker thread panicked"))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
