//! Viewer configuration
//!
//! Settings are stored as RON and every section falls back to its defaults
//! when omitted, so a config file only needs the values it overrides.

use std::path::Path;

use ar_core::constants::{
    DEFAULT_MODEL_SCALE, DEFAULT_PLACEMENT, MIN_SCALE_FACTOR, PAN_SPEED_FACTOR, SPIN_ANGLE,
    SPIN_DURATION,
};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::catalog::ModelEntry;

/// Gesture-to-pose mapping settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManipulationConfig {
    /// World meters per screen pixel for pan deltas
    pub pan_speed_factor: f32,
    /// Lower bound on the cumulative pinch factor
    pub min_scale_factor: f32,
    /// Snap the selected object's height to detected planes
    pub plane_snap: bool,
}

impl Default for ManipulationConfig {
    fn default() -> Self {
        Self {
            pan_speed_factor: PAN_SPEED_FACTOR,
            min_scale_factor: MIN_SCALE_FACTOR,
            plane_snap: true,
        }
    }
}

/// Where and how large a freshly placed model appears
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// World-anchored position
    pub position: [f32; 3],
    /// Uniform scale
    pub scale: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            position: DEFAULT_PLACEMENT,
            scale: DEFAULT_MODEL_SCALE,
        }
    }
}

impl PlacementConfig {
    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Directional light added to the scene at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Intensity in lux
    pub intensity: f32,
    /// Light color (RGB)
    pub color: [f32; 3],
    /// Downward tilt about world X (radians)
    pub tilt: f32,
    /// Let the light cast shadows onto real-world surfaces
    pub real_world_proxy: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            intensity: 1000.0,
            color: [1.0, 1.0, 1.0],
            tilt: -std::f32::consts::FRAC_PI_4,
            real_world_proxy: true,
        }
    }
}

impl LightConfig {
    /// Light orientation
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.tilt)
    }
}

/// Spin control animation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpinConfig {
    /// Rotation about world +Y per spin (radians)
    pub angle: f32,
    /// Animation length (seconds)
    pub duration: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            angle: SPIN_ANGLE,
            duration: SPIN_DURATION,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Gesture mapping
    pub manipulation: ManipulationConfig,
    /// Model placement
    pub placement: PlacementConfig,
    /// Scene light
    pub light: LightConfig,
    /// Spin control
    pub spin: SpinConfig,
    /// Selectable models, in display order
    pub catalog: Vec<ModelEntry>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            manipulation: ManipulationConfig::default(),
            placement: PlacementConfig::default(),
            light: LightConfig::default(),
            spin: SpinConfig::default(),
            catalog: ModelEntry::defaults(),
        }
    }
}

impl ViewerConfig {
    /// Save config to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize config to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load config from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: ViewerConfig =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        tracing::info!("Loaded viewer config from {:?}", path);
        Ok(config)
    }

    /// Load config from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: ViewerConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(config)
    }
}

/// Config-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The config could not be written as RON
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The config file is not valid RON for this schema
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_placement_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.placement.position(), Vec3::new(0.0, -1.0, -3.0));
        assert_relative_eq!(config.placement.scale, 0.05);
        assert_relative_eq!(config.manipulation.pan_speed_factor, 0.001);
        assert_relative_eq!(config.manipulation.min_scale_factor, 1e-4);
        assert_relative_eq!(config.light.tilt, -std::f32::consts::FRAC_PI_4);
        assert_eq!(config.catalog.len(), 4);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.ron");

        let mut config = ViewerConfig::default();
        config.manipulation.pan_speed_factor = 0.002;
        config.spin.duration = 0.5;
        config.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded.manipulation, config.manipulation);
        assert_eq!(loaded.placement, config.placement);
        assert_eq!(loaded.light, config.light);
        assert_eq!(loaded.spin, config.spin);
        let ids: Vec<_> = loaded.catalog.iter().map(|e| e.model_id.as_str()).collect();
        assert_eq!(ids, ["toycar", "chair_swan", "gramophone", "cup_saucer_set"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config =
            ViewerConfig::load_from_bytes(b"(placement: (scale: 0.2), light: (intensity: 500.0))")
                .unwrap();
        assert_eq!(config.placement.scale, 0.2);
        assert_eq!(config.placement.position, DEFAULT_PLACEMENT);
        assert_eq!(config.light.intensity, 500.0);
        assert!(config.light.real_world_proxy);
        assert_eq!(config.spin, SpinConfig::default());
    }

    #[test]
    fn test_demo_config() {
        let config =
            ViewerConfig::load_from_bytes(include_bytes!("../../../demos/viewer.ron")).unwrap();
        assert_relative_eq!(config.manipulation.pan_speed_factor, 0.002);
        assert_relative_eq!(config.manipulation.min_scale_factor, 0.01);
        assert!(config.manipulation.plane_snap);
        assert_eq!(config.placement, PlacementConfig::default());
        assert_relative_eq!(config.light.intensity, 800.0);
        assert_relative_eq!(config.light.tilt, -std::f32::consts::FRAC_PI_4);
        assert_relative_eq!(config.spin.angle, std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
        assert_eq!(config.catalog.len(), 4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = ViewerConfig::load_from_bytes(b"(placement: 12)");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ViewerConfig::load(dir.path().join("absent.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
