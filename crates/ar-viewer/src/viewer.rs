//! Viewer state: placed objects, selection and gesture routing

use std::collections::HashMap;
use std::sync::Arc;

use ar_core::{
    GestureEvent, GestureKind, GestureOutcome, GestureReset, ManipulationError, Manipulator,
    ObjectHandle, OrientationTween, PlaneAnchor, Pose, apply_plane_snap,
};
use parking_lot::Mutex;

use crate::catalog::ModelCatalog;
use crate::config::ViewerConfig;
use crate::loader::ModelLoader;
use crate::recognizer::Recognizer;
use crate::scene::{Scene, SceneObject};

/// Viewer state
///
/// Gesture and plane callbacks act on the selected object only. Every update
/// reads the object's pose, runs it through the engine and writes it back,
/// so callers on more than one thread must go through [`SharedViewer`].
pub struct Viewer {
    config: ViewerConfig,
    scene: Scene,
    catalog: ModelCatalog,
    /// Gesture baselines per placed object
    manipulators: HashMap<ObjectHandle, Manipulator>,
    selected: Option<ObjectHandle>,
    /// Running spin animation and the object it drives
    spin: Option<(ObjectHandle, OrientationTween)>,
    last_plane: Option<PlaneAnchor>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    /// Create a viewer with an empty, lit scene
    pub fn new(config: ViewerConfig) -> Self {
        let scene = Scene::new(&config.light);
        let catalog = ModelCatalog::new(config.catalog.clone());
        Self {
            config,
            scene,
            catalog,
            manipulators: HashMap::new(),
            selected: None,
            spin: None,
            last_plane: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Placed objects
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Model catalog
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Mutable model catalog (for changing the selection)
    pub fn catalog_mut(&mut self) -> &mut ModelCatalog {
        &mut self.catalog
    }

    /// Handle of the object gestures act on
    pub fn selected(&self) -> Option<ObjectHandle> {
        self.selected
    }

    /// Pose of a placed object
    pub fn pose(&self, handle: ObjectHandle) -> Option<Pose> {
        self.scene.get(handle).map(|object| object.pose)
    }

    /// Pose of the selected object
    pub fn selected_pose(&self) -> Option<Pose> {
        self.selected.and_then(|handle| self.pose(handle))
    }

    /// Most recent plane reported by world tracking
    pub fn last_plane(&self) -> Option<PlaneAnchor> {
        self.last_plane
    }

    /// Whether a spin animation is running
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    // ============== Placement ==============

    /// Load and place the catalog's selected model
    pub fn place_selected(
        &mut self,
        loader: &dyn ModelLoader,
    ) -> Result<ObjectHandle, ManipulationError> {
        let Some(entry) = self.catalog.selected() else {
            return Err(ManipulationError::ModelLoadFailure {
                model: String::new(),
                reason: "model catalog is empty".to_string(),
            });
        };
        let model_id = entry.model_id.clone();
        self.place_model(&model_id, loader)
    }

    /// Load `model_id` and place it at the configured position and scale
    ///
    /// The new object becomes the selection. A load failure is logged and
    /// nothing is placed.
    pub fn place_model(
        &mut self,
        model_id: &str,
        loader: &dyn ModelLoader,
    ) -> Result<ObjectHandle, ManipulationError> {
        let asset = loader.load(model_id).map_err(|e| {
            tracing::error!("Failed to load model '{}': {}", model_id, e);
            ManipulationError::ModelLoadFailure {
                model: model_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let placement = &self.config.placement;
        let pose = Pose::from_position(placement.position()).with_uniform_scale(placement.scale);
        let handle = self.scene.place(asset, pose);
        self.manipulators.insert(
            handle,
            Manipulator::with_scale_floor(
                self.config.manipulation.pan_speed_factor,
                self.config.manipulation.min_scale_factor,
            ),
        );
        self.set_selection(handle);
        Ok(handle)
    }

    /// Make `handle` the object gestures act on
    pub fn select(&mut self, handle: ObjectHandle) -> Result<(), ManipulationError> {
        if !self.scene.contains(handle) {
            return Err(ManipulationError::ObjectNotFound(handle));
        }
        self.set_selection(handle);
        Ok(())
    }

    fn set_selection(&mut self, handle: ObjectHandle) {
        if let Some(previous) = self.selected
            && previous != handle
            && let Some(manipulator) = self.manipulators.get_mut(&previous)
        {
            // Gestures in flight belong to the previous object
            manipulator.reset();
        }
        self.selected = Some(handle);
    }

    /// Remove a placed object
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<SceneObject> {
        self.manipulators.remove(&handle);
        if self.selected == Some(handle) {
            self.selected = None;
        }
        if self.spin.is_some_and(|(spinning, _)| spinning == handle) {
            self.spin = None;
        }
        self.scene.remove(handle)
    }

    fn target(&self) -> Result<ObjectHandle, ManipulationError> {
        let handle = self.selected.ok_or(ManipulationError::NoSelection)?;
        if !self.scene.contains(handle) {
            return Err(ManipulationError::ObjectNotFound(handle));
        }
        Ok(handle)
    }

    // ============== Gestures ==============

    /// Apply a gesture event to the selected object
    ///
    /// `Ok(None)` means the engine discarded the event.
    pub fn try_handle_gesture(
        &mut self,
        event: GestureEvent,
    ) -> Result<Option<GestureOutcome>, ManipulationError> {
        let handle = self.target()?;
        let pose = self
            .pose(handle)
            .ok_or(ManipulationError::ObjectNotFound(handle))?;

        if event.kind() == GestureKind::Rotate
            && self.spin.is_some_and(|(spinning, _)| spinning == handle)
        {
            tracing::debug!("Rotation gesture interrupts spin on {}", handle);
            self.spin = None;
        }

        let settings = &self.config.manipulation;
        let manipulator = self.manipulators.entry(handle).or_insert_with(|| {
            Manipulator::with_scale_floor(settings.pan_speed_factor, settings.min_scale_factor)
        });

        let Some(outcome) = manipulator.handle(pose, event) else {
            tracing::debug!(
                "Discarded {} {:?} event for {}",
                event.kind().display_name(),
                event.phase,
                handle
            );
            return Ok(None);
        };

        if let Some(object) = self.scene.get_mut(handle) {
            object.pose = outcome.pose;
        }
        Ok(Some(outcome))
    }

    /// Apply a gesture event, returning the reset to perform on its recognizer
    ///
    /// A missing target is a no-op.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<GestureReset> {
        match self.try_handle_gesture(event) {
            Ok(outcome) => outcome.and_then(|o| o.reset),
            Err(e) => {
                tracing::debug!("Ignoring {} gesture: {}", event.kind().display_name(), e);
                None
            }
        }
    }

    /// Apply an event from `recognizer` and perform the reset it asks for
    pub fn dispatch<R: Recognizer>(
        &mut self,
        recognizer: &mut R,
        event: GestureEvent,
    ) -> Option<GestureReset> {
        if event.kind() != recognizer.kind() {
            tracing::warn!(
                "{} event delivered through a {} recognizer",
                event.kind().display_name(),
                recognizer.kind().display_name()
            );
            return None;
        }

        let reset = self.handle_gesture(event);
        if let Some(reset) = reset {
            recognizer.apply_reset(reset);
        }
        reset
    }

    // ============== Plane tracking ==============

    /// Snap the selected object's height to an updated plane
    ///
    /// Returns the new pose when the object moved.
    pub fn handle_plane_update(&mut self, anchor: PlaneAnchor) -> Option<Pose> {
        self.last_plane = Some(anchor);

        if !self.config.manipulation.plane_snap {
            return None;
        }
        if !anchor.has_extent() {
            tracing::debug!("Ignoring plane {} without extent", anchor.id);
            return None;
        }

        let handle = match self.target() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::debug!("Ignoring plane update: {}", e);
                return None;
            }
        };

        let object = self.scene.get_mut(handle)?;
        object.pose = apply_plane_snap(object.pose, anchor.height);
        Some(object.pose)
    }

    // ============== Spin animation ==============

    /// Start spinning the selected object about world up
    pub fn spin_selected(&mut self) -> Result<(), ManipulationError> {
        let handle = self.target()?;
        let pose = self
            .pose(handle)
            .ok_or(ManipulationError::ObjectNotFound(handle))?;

        let spin = &self.config.spin;
        let tween = OrientationTween::spin(pose.orientation, spin.angle, spin.duration);
        tracing::info!(
            "Spinning {} by {:.3} rad over {:.2}s",
            handle,
            spin.angle,
            spin.duration
        );
        self.spin = Some((handle, tween));
        Ok(())
    }

    /// Advance the spin animation by `dt` seconds
    ///
    /// Returns the animated object's pose while a spin is running.
    pub fn tick(&mut self, dt: f32) -> Option<Pose> {
        let (handle, tween) = self.spin.as_mut()?;
        let handle = *handle;
        let orientation = tween.advance(dt);
        let finished = tween.is_finished();

        let Some(object) = self.scene.get_mut(handle) else {
            self.spin = None;
            return None;
        };
        object.pose.orientation = orientation;
        let pose = object.pose;

        if finished {
            tracing::debug!("Spin on {} finished", handle);
            self.spin = None;
        }
        Some(pose)
    }

    /// Wrap the viewer for use from more than one thread
    pub fn into_shared(self) -> SharedViewer {
        Arc::new(Mutex::new(self))
    }
}

/// Viewer behind a lock; the single writer for every pose update
pub type SharedViewer = Arc<Mutex<Viewer>>;
