//! Capture error taxonomy.

use thiserror::Error;

use crate::capture::ClassifiedFailure;

/// Failures the capture pipeline surfaces to the caller.
///
/// Strategies never construct these; they absorb their own faults and
/// degrade to "no result". Only the eager dependency check, the terminal
/// classification, and the save step produce a `CaptureError`.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A required external tool is not on the search path.
    #[error("required tool '{tool}' not found")]
    MissingDependency { tool: String },

    /// No retrievable clipboard data of any kind.
    #[error("clipboard is empty")]
    EmptyClipboard,

    /// The clipboard holds data, but nothing recognizable as an image.
    #[error("no image on the clipboard")]
    NoImageContent,

    /// Normalization or the file write failed after a successful grab.
    #[error("failed to save file: {0}")]
    Save(String),

    /// Any other unexpected fault, carried with its detail text.
    #[error("{0}")]
    Other(String),
}

impl From<ClassifiedFailure> for CaptureError {
    fn from(failure: ClassifiedFailure) -> Self {
        match failure {
            ClassifiedFailure::EmptyClipboard => CaptureError::EmptyClipboard,
            ClassifiedFailure::NoImageContent => CaptureError::NoImageContent,
        }
    }
}

impl From<anyhow::Error> for CaptureError {
    fn from(err: anyhow::Error) -> Self {
        CaptureError::Other(err.to_string())
    }
}
