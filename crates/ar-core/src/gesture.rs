//! Gesture events as delivered by the host's recognizers

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gesture kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    Pan,
    Pinch,
    Rotate,
}

impl GestureKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureKind::Pan => "Pan",
            GestureKind::Pinch => "Pinch",
            GestureKind::Rotate => "Rotate",
        }
    }
}

/// Recognizer state for one callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GesturePhase {
    Began,
    #[default]
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Ended and cancelled both close the gesture instance
    pub fn is_terminal(&self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Gesture payload, in the recognizer's native units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GesturePayload {
    /// Screen-space translation in pixels since the previous pan callback
    Translation(Vec2),
    /// Pinch scale factor, cumulative since the gesture began
    Scale(f32),
    /// Rotation in radians, cumulative since the gesture began (counter-clockwise positive)
    Angle(f32),
}

impl GesturePayload {
    /// The gesture kind this payload belongs to
    pub fn kind(&self) -> GestureKind {
        match self {
            GesturePayload::Translation(_) => GestureKind::Pan,
            GesturePayload::Scale(_) => GestureKind::Pinch,
            GesturePayload::Angle(_) => GestureKind::Rotate,
        }
    }
}

/// A single recognizer callback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub payload: GesturePayload,
}

impl GestureEvent {
    pub fn new(phase: GesturePhase, payload: GesturePayload) -> Self {
        Self { phase, payload }
    }

    pub fn pan(phase: GesturePhase, translation: Vec2) -> Self {
        Self::new(phase, GesturePayload::Translation(translation))
    }

    pub fn pinch(phase: GesturePhase, scale: f32) -> Self {
        Self::new(phase, GesturePayload::Scale(scale))
    }

    pub fn rotate(phase: GesturePhase, angle: f32) -> Self {
        Self::new(phase, GesturePayload::Angle(angle))
    }

    pub fn kind(&self) -> GestureKind {
        self.payload.kind()
    }
}

/// Reset the caller must apply to its recognizer after an update
///
/// Recognizers report cumulative values and never reset themselves, so every
/// update that consumes a value tells the caller which value to rewind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureReset {
    /// Zero the pan translation
    Translation,
    /// Set the pinch scale back to 1.0
    Scale,
    /// Set the rotation angle back to 0
    Rotation,
}

impl GestureReset {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureReset::Translation => GestureKind::Pan,
            GestureReset::Scale => GestureKind::Pinch,
            GestureReset::Rotation => GestureKind::Rotate,
        }
    }
}
