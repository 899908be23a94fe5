/// Convenience result type used across bootanim.
pub type BootanimResult<T> = Result<T, BootanimError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Fatal variants abort the whole job; per-frame decode failures are not
/// errors at this level (the assembler skips them with a warning).
#[derive(thiserror::Error, Debug)]
pub enum BootanimError {
    /// Invalid user-provided plan or manifest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// No input frame could be opened to establish archive dimensions.
    #[error("no valid frames: none of the input images could be decoded")]
    NoValidFrames,

    /// Every segment ended up with zero successfully processed frames.
    #[error("no segments produced: nothing survived frame processing")]
    NoSegmentsProduced,

    /// IO failure while writing the descriptor or archive.
    #[error("archive write failed: {0}")]
    ArchiveWrite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootanimError {
    /// Build a [`BootanimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BootanimError::ArchiveWrite`] value.
    pub fn archive_write(msg: impl Into<String>) -> Self {
        Self::ArchiveWrite(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
