use crate::foundation::error::{BootanimError, BootanimResult};

/// Highest frame rate the playback engine accepts.
pub const MAX_FPS: u32 = 60;

/// Global animation frame rate in frames per second.
///
/// The desc.txt grammar carries a plain positive integer; values outside
/// `1..=60` are rejected at construction.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    /// Create a validated FPS value.
    pub fn new(fps: u32) -> BootanimResult<Self> {
        if fps == 0 || fps > MAX_FPS {
            return Err(BootanimError::validation(format!(
                "fps must be in 1..={MAX_FPS}, got {fps}"
            )));
        }
        Ok(Self(fps))
    }

    /// Return the raw frames-per-second value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Fps {
    type Error = BootanimError;

    fn try_from(fps: u32) -> BootanimResult<Self> {
        Self::new(fps)
    }
}

impl From<Fps> for u32 {
    fn from(fps: Fps) -> Self {
        fps.0
    }
}

/// Archive frame dimensions in pixels.
///
/// Taken from the first input-order image that decodes successfully and
/// declared once for the whole animation in the descriptor's first line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
