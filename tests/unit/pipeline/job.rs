use super::*;

use crate::foundation::core::Fps;
use crate::plan::model::ImageRecord;

#[test]
fn progress_tracker_drops_non_increasing_values() {
    let mut seen = Vec::new();
    {
        let mut sink = |pct: u8| seen.push(pct);
        let mut progress = ProgressTracker::new(&mut sink);
        progress.emit(10);
        progress.emit(10);
        progress.emit(5);
        progress.emit(42);
        progress.emit(42);
        assert_eq!(progress.last(), 42);
    }
    assert_eq!(seen, [10, 42]);
}

#[test]
fn progress_tracker_clamps_to_100() {
    let mut seen = Vec::new();
    {
        let mut sink = |pct: u8| seen.push(pct);
        let mut progress = ProgressTracker::new(&mut sink);
        progress.emit(250);
    }
    assert_eq!(seen, [100]);
}

#[test]
fn spawned_job_emits_exactly_one_terminal_event() {
    let dir = tempfile::tempdir().unwrap();
    // No record decodes, so the job must fail after attempting every frame.
    let plan = AnimationPlan::new(
        vec![ImageRecord::from_path(dir.path().join("missing.png"), 0)],
        vec![],
        Fps::new(30).unwrap(),
        dir.path().join("out.zip"),
    )
    .unwrap();

    let handle = Job::spawn(plan);
    let events: Vec<_> = handle.events().collect();
    handle.join().unwrap();

    let terminals = events
        .iter()
        .filter(|e| matches!(e, JobEvent::Finished(_) | JobEvent::Failed(_)))
        .count();
    assert_eq!(terminals, 1);
    match events.last().unwrap() {
        JobEvent::Failed(msg) => assert!(msg.contains("no valid frames")),
        other => panic!("expected terminal failure, got {other:?}"),
    }
    assert!(!dir.path().join("out.zip").exists());
}
