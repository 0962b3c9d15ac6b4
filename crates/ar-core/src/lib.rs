//! Gesture-driven pose manipulation for AR scene objects
//!
//! Maps pan, pinch and rotation gesture values onto an object's [`Pose`] and
//! snaps object height to detected horizontal planes. Everything here is pure
//! transform math: callers own the poses and the per-object
//! [`ManipulationSession`], and perform the [`GestureReset`] each update asks for.

pub mod constants;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod manipulator;
pub mod plane;
pub mod pose;
pub mod session;
pub mod tween;

pub use engine::{
    GestureOutcome, apply_pan, apply_pinch, apply_pinch_with_floor, apply_plane_snap,
    apply_rotation, clamp_scale_factor, rotation_around_y, sanitize_scale_factor,
};
pub use error::ManipulationError;
pub use gesture::{GestureEvent, GestureKind, GesturePayload, GesturePhase, GestureReset};
pub use manipulator::Manipulator;
pub use plane::PlaneAnchor;
pub use pose::{ObjectHandle, Pose};
pub use session::ManipulationSession;
pub use tween::OrientationTween;
