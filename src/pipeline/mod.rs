//! Job orchestration: synchronous pipeline runs and background workers.

/// Job runner, progress tracking, and the background event stream.
pub mod job;
