//! Boundary data model for packaging jobs.

/// Plan, record, and segment-spec types plus JSON manifest loading.
pub mod model;
