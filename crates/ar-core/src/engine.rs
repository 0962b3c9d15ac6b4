//! Pose update functions for pan, pinch, rotation and plane snapping
//!
//! Each function takes the current pose (and, for the baseline-relative
//! gestures, the object's [`ManipulationSession`]) and returns the new pose.
//! None of them hold a reference to the scene or the recognizer.
//!
//! Pan is applied per callback delta. Pinch and rotation are applied against
//! the baseline captured at [`GesturePhase::Began`]:
//!
//! ```text
//! scale       = initial_scale * cumulative_factor
//! orientation = Ry(cumulative_angle) * initial_orientation
//! ```

use glam::{Quat, Vec2};

use crate::constants::MIN_SCALE_FACTOR;
use crate::error::ManipulationError;
use crate::gesture::{GesturePhase, GestureReset};
use crate::pose::Pose;
use crate::session::ManipulationSession;

/// Result of feeding one gesture value to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOutcome {
    pub pose: Pose,
    /// Reset the caller must apply to the recognizer that produced the value
    pub reset: Option<GestureReset>,
}

impl GestureOutcome {
    fn unchanged(pose: Pose) -> Self {
        Self { pose, reset: None }
    }
}

/// Rotation of `angle` radians about world +Y (counter-clockwise seen from above)
pub fn rotation_around_y(angle: f32) -> Quat {
    Quat::from_rotation_y(angle)
}

/// Clamp a pinch factor to a strictly positive value
///
/// Non-positive and non-finite factors come from a misbehaving gesture source
/// and are replaced with [`MIN_SCALE_FACTOR`].
pub fn sanitize_scale_factor(factor: f32) -> f32 {
    clamp_scale_factor(factor, MIN_SCALE_FACTOR)
}

/// Clamp a pinch factor to at least `floor`
///
/// A floor that is not strictly positive falls back to [`MIN_SCALE_FACTOR`].
pub fn clamp_scale_factor(factor: f32, floor: f32) -> f32 {
    let floor = if floor.is_finite() && floor > 0.0 {
        floor
    } else {
        MIN_SCALE_FACTOR
    };
    if factor.is_finite() && factor > 0.0 {
        return factor.max(floor);
    }
    tracing::warn!(
        "{}; clamping to {}",
        ManipulationError::DegenerateGestureInput(factor),
        floor
    );
    floor
}

/// Move a pose by a screen-space pan delta
///
/// `translation` is the delta since the previous pan callback. Screen X maps
/// to world X and screen Y to world Z; height is left for plane snapping.
pub fn apply_pan(pose: Pose, translation: Vec2, speed_factor: f32) -> GestureOutcome {
    let mut pose = pose;
    pose.position.x += translation.x * speed_factor;
    pose.position.z += translation.y * speed_factor;

    GestureOutcome {
        pose,
        reset: Some(GestureReset::Translation),
    }
}

/// Scale a pose by a pinch factor cumulative since the gesture began
///
/// Returns `None` when a change arrives without a baseline (no `Began`, or
/// after the gesture ended or was cancelled); such deltas are discarded.
pub fn apply_pinch(
    pose: Pose,
    phase: GesturePhase,
    cumulative_factor: f32,
    session: &mut ManipulationSession,
) -> Option<GestureOutcome> {
    apply_pinch_with_floor(pose, phase, cumulative_factor, MIN_SCALE_FACTOR, session)
}

/// [`apply_pinch`] with a caller-chosen lower bound on the factor
pub fn apply_pinch_with_floor(
    pose: Pose,
    phase: GesturePhase,
    cumulative_factor: f32,
    min_factor: f32,
    session: &mut ManipulationSession,
) -> Option<GestureOutcome> {
    match phase {
        GesturePhase::Began => {
            session.initial_scale = Some(pose.scale);
            Some(GestureOutcome::unchanged(pose))
        }
        GesturePhase::Changed => {
            let initial_scale = session.initial_scale?;
            let factor = clamp_scale_factor(cumulative_factor, min_factor);
            let mut pose = pose;
            pose.scale = initial_scale * factor;
            Some(GestureOutcome::unchanged(pose))
        }
        GesturePhase::Ended | GesturePhase::Cancelled => {
            session.initial_scale = None;
            Some(GestureOutcome {
                pose,
                reset: Some(GestureReset::Scale),
            })
        }
    }
}

/// Rotate a pose about world +Y by an angle cumulative since the gesture began
///
/// The new rotation is applied before the baseline, so it is expressed in
/// world space rather than object-local space. Returns `None` for discarded
/// changes (no baseline, or a non-finite angle).
pub fn apply_rotation(
    pose: Pose,
    phase: GesturePhase,
    cumulative_angle: f32,
    session: &mut ManipulationSession,
) -> Option<GestureOutcome> {
    match phase {
        GesturePhase::Began => {
            session.initial_orientation = Some(pose.orientation);
            Some(GestureOutcome::unchanged(pose))
        }
        GesturePhase::Changed => {
            let initial_orientation = session.initial_orientation?;
            if !cumulative_angle.is_finite() {
                tracing::debug!("Discarding non-finite rotation angle {}", cumulative_angle);
                return None;
            }
            let mut pose = pose;
            pose.orientation =
                (rotation_around_y(cumulative_angle) * initial_orientation).normalize();
            Some(GestureOutcome::unchanged(pose))
        }
        GesturePhase::Ended | GesturePhase::Cancelled => {
            session.initial_orientation = None;
            Some(GestureOutcome {
                pose,
                reset: Some(GestureReset::Rotation),
            })
        }
    }
}

/// Set a pose's height to a detected plane's world Y
pub fn apply_plane_snap(pose: Pose, plane_world_y: f32) -> Pose {
    let mut pose = pose;
    pose.position.y = plane_world_y;
    pose
}
