//! Segment assembly: frame re-encoding and per-segment sequencing.

/// Frame decode/re-encode pipeline.
pub mod frames;
