//! Per-object gesture baselines

use glam::{Quat, Vec3};

/// Baselines captured at gesture-begin for one manipulable object
///
/// Pinch and rotation updates are computed relative to these values, never
/// from the previous frame. Pan has no baseline; only its activity is tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManipulationSession {
    pub initial_scale: Option<Vec3>,
    pub initial_orientation: Option<Quat>,
    pub pan_active: bool,
}

impl ManipulationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinching(&self) -> bool {
        self.initial_scale.is_some()
    }

    pub fn is_rotating(&self) -> bool {
        self.initial_orientation.is_some()
    }

    pub fn is_idle(&self) -> bool {
        !self.pan_active && !self.is_pinching() && !self.is_rotating()
    }

    /// Drop every baseline (object removed, selection changed)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
