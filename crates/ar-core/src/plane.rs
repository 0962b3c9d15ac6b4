//! Detected horizontal plane anchors

use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Horizontal plane reported by world tracking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneAnchor {
    pub id: Uuid,
    /// World Y of the plane surface
    pub height: f32,
    /// Horizontal extent (width along X, depth along Z)
    pub extent: Vec2,
}

impl PlaneAnchor {
    pub fn new(height: f32, extent: Vec2) -> Self {
        Self {
            id: Uuid::new_v4(),
            height,
            extent,
        }
    }

    /// Planes with no area carry no usable surface
    pub fn has_extent(&self) -> bool {
        self.extent.x > 0.0 && self.extent.y > 0.0
    }
}
