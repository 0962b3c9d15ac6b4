//! Object pose and handle definitions

use std::fmt;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_MODEL_SCALE, DEFAULT_PLACEMENT};

/// Opaque identifier for a placed object, handed out at placement time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(Uuid);

impl ObjectHandle {
    /// Create a fresh handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for ObjectHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pose (position, orientation and scale) of an object in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    /// Unit quaternion
    pub orientation: Quat,
    /// Per-axis scale (uniform scale stores the same value on every axis)
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, orientation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            orientation,
            scale,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Pose given to a freshly placed model
    pub fn placement() -> Self {
        Self::from_position(Vec3::from(DEFAULT_PLACEMENT)).with_uniform_scale(DEFAULT_MODEL_SCALE)
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..self
        }
    }

    pub fn with_orientation(self, orientation: Quat) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Convert to a world matrix (scale, then rotate, then translate)
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Decompose a world matrix back into a pose
    pub fn from_mat4(matrix: Mat4) -> Self {
        let (scale, orientation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            orientation,
            scale,
        }
    }
}
