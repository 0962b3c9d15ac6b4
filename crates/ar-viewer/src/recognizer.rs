//! Gesture recognizer adapters
//!
//! These model the host's recognizers: each reports a value that keeps
//! accumulating until the consumer rewinds it. The viewer returns a
//! [`GestureReset`] after each update and the adapter applies it.

use ar_core::{GestureEvent, GestureKind, GesturePhase, GestureReset};
use glam::Vec2;

/// A recognizer that accepts reset instructions
pub trait Recognizer {
    /// Gesture kind this recognizer produces
    fn kind(&self) -> GestureKind;

    /// Rewind the recognizer's value as instructed
    fn apply_reset(&mut self, reset: GestureReset);
}

/// Pan recognizer; translation accumulates until reset
#[derive(Debug, Clone, Copy, Default)]
pub struct PanRecognizer {
    translation: Vec2,
}

impl PanRecognizer {
    /// Create a recognizer at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Translation accumulated since the last reset
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Report a finger movement of `delta` pixels
    pub fn report(&mut self, phase: GesturePhase, delta: Vec2) -> GestureEvent {
        self.translation += delta;
        GestureEvent::pan(phase, self.translation)
    }
}

impl Recognizer for PanRecognizer {
    fn kind(&self) -> GestureKind {
        GestureKind::Pan
    }

    fn apply_reset(&mut self, reset: GestureReset) {
        if reset == GestureReset::Translation {
            self.translation = Vec2::ZERO;
        }
    }
}

/// Pinch recognizer; scale is cumulative since the gesture began
#[derive(Debug, Clone, Copy)]
pub struct PinchRecognizer {
    scale: f32,
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PinchRecognizer {
    /// Create a recognizer at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Report the finger spread as a factor of the spread at gesture-begin
    pub fn report(&mut self, phase: GesturePhase, scale: f32) -> GestureEvent {
        self.scale = scale;
        GestureEvent::pinch(phase, self.scale)
    }
}

impl Recognizer for PinchRecognizer {
    fn kind(&self) -> GestureKind {
        GestureKind::Pinch
    }

    fn apply_reset(&mut self, reset: GestureReset) {
        if reset == GestureReset::Scale {
            self.scale = 1.0;
        }
    }
}

/// Rotation recognizer; angle is cumulative since the gesture began
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationRecognizer {
    rotation: f32,
}

impl RotationRecognizer {
    /// Create a recognizer at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative angle (radians)
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Report the two-finger twist in radians since gesture-begin
    pub fn report(&mut self, phase: GesturePhase, rotation: f32) -> GestureEvent {
        self.rotation = rotation;
        GestureEvent::rotate(phase, self.rotation)
    }
}

impl Recognizer for RotationRecognizer {
    fn kind(&self) -> GestureKind {
        GestureKind::Rotate
    }

    fn apply_reset(&mut self, reset: GestureReset) {
        if reset == GestureReset::Rotation {
            self.rotation = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_accumulates_until_reset() {
        let mut pan = PanRecognizer::new();
        pan.report(GesturePhase::Began, Vec2::new(3.0, 1.0));
        let event = pan.report(GesturePhase::Changed, Vec2::new(2.0, 1.0));
        assert_eq!(event, GestureEvent::pan(GesturePhase::Changed, Vec2::new(5.0, 2.0)));

        pan.apply_reset(GestureReset::Translation);
        assert_eq!(pan.translation(), Vec2::ZERO);
    }

    #[test]
    fn test_resets_only_apply_to_matching_kind() {
        let mut pinch = PinchRecognizer::new();
        pinch.report(GesturePhase::Changed, 2.5);
        pinch.apply_reset(GestureReset::Rotation);
        assert_eq!(pinch.scale(), 2.5);
        pinch.apply_reset(GestureReset::Scale);
        assert_eq!(pinch.scale(), 1.0);

        let mut rotation = RotationRecognizer::new();
        rotation.report(GesturePhase::Changed, 0.4);
        rotation.apply_reset(GestureReset::Translation);
        assert_eq!(rotation.rotation(), 0.4);
        rotation.apply_reset(GestureReset::Rotation);
        assert_eq!(rotation.rotation(), 0.0);
        assert_eq!(rotation.kind(), GestureKind::Rotate);
    }
}
