//! Placed objects and scene lighting

use std::collections::HashMap;

use ar_core::{ObjectHandle, Pose};
use glam::{Mat4, Quat, Vec3};

use crate::config::LightConfig;
use crate::loader::ModelAsset;

/// A model placed in the scene
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Handle returned at placement
    pub handle: ObjectHandle,
    /// Catalog id the model was loaded from
    pub model_id: String,
    /// Encoded asset handed to the renderer
    pub asset: ModelAsset,
    /// World pose
    pub pose: Pose,
}

impl SceneObject {
    /// World matrix of the object
    pub fn world_transform(&self) -> Mat4 {
        self.pose.to_mat4()
    }
}

/// World-anchored directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Intensity in lux
    pub intensity: f32,
    /// Light color (RGB)
    pub color: [f32; 3],
    /// Light orientation
    pub orientation: Quat,
    /// Cast shadows onto real-world surfaces
    pub real_world_proxy: bool,
    /// World position of the light's anchor
    pub anchor: Vec3,
}

impl From<&LightConfig> for DirectionalLight {
    fn from(config: &LightConfig) -> Self {
        Self {
            intensity: config.intensity,
            color: config.color,
            orientation: config.orientation(),
            real_world_proxy: config.real_world_proxy,
            anchor: Vec3::ZERO,
        }
    }
}

impl DirectionalLight {
    /// Direction the light travels (its local -Z in world space)
    pub fn direction(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

/// Objects placed in the AR view, keyed by handle
#[derive(Debug, Clone)]
pub struct Scene {
    objects: HashMap<ObjectHandle, SceneObject>,
    /// Scene light
    pub light: DirectionalLight,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&LightConfig::default())
    }
}

impl Scene {
    /// Create an empty scene lit by `light`
    pub fn new(light: &LightConfig) -> Self {
        Self {
            objects: HashMap::new(),
            light: DirectionalLight::from(light),
        }
    }

    /// Place a loaded model, returns its handle
    pub fn place(&mut self, asset: ModelAsset, pose: Pose) -> ObjectHandle {
        let handle = ObjectHandle::new();
        let object = SceneObject {
            handle,
            model_id: asset.model_id.clone(),
            asset,
            pose,
        };
        tracing::info!(
            "Placed '{}' as {} at {:?}",
            object.model_id,
            handle,
            object.pose.position
        );
        self.objects.insert(handle, object);
        handle
    }

    /// Get an object by handle
    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    /// Get a mutable object by handle
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        self.objects.get_mut(&handle)
    }

    /// Remove an object by handle
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<SceneObject> {
        self.objects.remove(&handle)
    }

    /// Whether the handle refers to a placed object
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// Iterate over all objects
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Number of placed objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no object is placed
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str) -> ModelAsset {
        ModelAsset {
            model_id: id.to_string(),
            path: None,
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_place_and_lookup() {
        let mut scene = Scene::default();
        let handle = scene.place(asset("toycar"), Pose::placement());

        assert_eq!(scene.len(), 1);
        let object = scene.get(handle).unwrap();
        assert_eq!(object.model_id, "toycar");
        assert_eq!(object.pose, Pose::placement());
    }

    #[test]
    fn test_missing_handle_is_none() {
        let mut scene = Scene::default();
        let handle = scene.place(asset("toycar"), Pose::IDENTITY);
        scene.remove(handle);

        assert!(scene.get(handle).is_none());
        assert!(scene.get_mut(ObjectHandle::new()).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_default_light_points_down_and_forward() {
        let scene = Scene::default();
        assert_eq!(scene.light.intensity, 1000.0);
        let direction = scene.light.direction();
        assert!(direction.y < 0.0);
        assert!(direction.z < 0.0);
    }
}
