//! Error types.

use thiserror::Error;

/// Resize planning error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Source image has zero width or height.
    #[error("source image has zero area ({width}x{height})")]
    InvalidSource { width: u32, height: u32 },
}

/// Failure to parse one of the named selection values.
///
/// Pad colors never produce this: malformed colors fall back to black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown keep-proportion policy")]
    UnknownPolicy,
    #[error("unknown crop anchor")]
    UnknownAnchor,
    #[error("unknown resample method")]
    UnknownMethod,
    #[error("unknown orientation")]
    UnknownOrientation,
    /// Not of the form `W×H` (or `INVALID`).
    #[error("resolution must be WIDTH×HEIGHT")]
    InvalidResolution,
    /// Not of the form `W:H` with both parts nonzero.
    #[error("aspect ratio must be W:H with nonzero parts")]
    InvalidAspectRatio,
}
