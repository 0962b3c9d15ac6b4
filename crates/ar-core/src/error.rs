//! Manipulation error taxonomy
//!
//! None of these are fatal. Load failures abort placement, a missing target
//! turns the update into a no-op, and degenerate input is clamped.

use crate::pose::ObjectHandle;

/// Manipulation-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ManipulationError {
    #[error("Failed to load model '{model}': {reason}")]
    ModelLoadFailure { model: String, reason: String },
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectHandle),
    #[error("No object selected for manipulation")]
    NoSelection,
    #[error("Degenerate gesture input: scale factor {0}")]
    DegenerateGestureInput(f32),
}
