//! Gesture event dispatch for a single manipulable object

use glam::Vec2;

use crate::constants::{MIN_SCALE_FACTOR, PAN_SPEED_FACTOR};
use crate::engine::{GestureOutcome, apply_pan, apply_pinch_with_floor, apply_rotation};
use crate::gesture::{GestureEvent, GesturePayload, GesturePhase, GestureReset};
use crate::pose::Pose;
use crate::session::ManipulationSession;

/// Routes recognizer callbacks to the engine, tracking each gesture's lifecycle
///
/// Pan, pinch and rotation are tracked independently. Pinch writes only the
/// scale and rotation writes only the orientation, so simultaneous pinch and
/// rotate compose without interfering.
#[derive(Debug, Clone, Copy)]
pub struct Manipulator {
    pub session: ManipulationSession,
    /// World meters per screen pixel for pan deltas
    pub pan_speed_factor: f32,
    /// Lower bound on the cumulative pinch factor
    pub min_scale_factor: f32,
}

impl Default for Manipulator {
    fn default() -> Self {
        Self::new(PAN_SPEED_FACTOR)
    }
}

impl Manipulator {
    pub fn new(pan_speed_factor: f32) -> Self {
        Self::with_scale_floor(pan_speed_factor, MIN_SCALE_FACTOR)
    }

    pub fn with_scale_floor(pan_speed_factor: f32, min_scale_factor: f32) -> Self {
        Self {
            session: ManipulationSession::new(),
            pan_speed_factor,
            min_scale_factor,
        }
    }

    /// Apply one gesture event to `pose`
    ///
    /// Returns `None` when the event was discarded, e.g. a change that
    /// arrives after its gesture instance ended or was cancelled.
    pub fn handle(&mut self, pose: Pose, event: GestureEvent) -> Option<GestureOutcome> {
        let phase = event.phase;
        match event.payload {
            GesturePayload::Translation(translation) => self.handle_pan(pose, phase, translation),
            GesturePayload::Scale(factor) => {
                let floor = self.min_scale_factor;
                apply_pinch_with_floor(pose, phase, factor, floor, &mut self.session)
            }
            GesturePayload::Angle(angle) => apply_rotation(pose, phase, angle, &mut self.session),
        }
    }

    fn handle_pan(
        &mut self,
        pose: Pose,
        phase: GesturePhase,
        translation: Vec2,
    ) -> Option<GestureOutcome> {
        match phase {
            GesturePhase::Began => self.session.pan_active = true,
            GesturePhase::Changed | GesturePhase::Ended if self.session.pan_active => {}
            GesturePhase::Changed | GesturePhase::Ended => {
                tracing::debug!("Discarding pan delta outside an active gesture");
                return None;
            }
            GesturePhase::Cancelled => {
                self.session.pan_active = false;
                return Some(GestureOutcome {
                    pose,
                    reset: Some(GestureReset::Translation),
                });
            }
        }

        if phase == GesturePhase::Ended {
            self.session.pan_active = false;
        }
        Some(apply_pan(pose, translation, self.pan_speed_factor))
    }

    /// Forget every in-flight gesture
    pub fn reset(&mut self) {
        self.session.clear();
    }
}
