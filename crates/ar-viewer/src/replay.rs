//! Scripted event replay
//!
//! A replay script is a RON list of host events (placements, recognizer
//! callbacks, plane updates, animation ticks) fed through the same
//! recognizer adapters and viewer entry points a live host would use.

use std::path::Path;

use ar_core::{GesturePhase, ManipulationError, ObjectHandle, PlaneAnchor, Pose};
use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::loader::ModelLoader;
use crate::recognizer::{PanRecognizer, PinchRecognizer, RotationRecognizer};
use crate::viewer::Viewer;

/// One host event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReplayStep {
    /// Place the catalog's selected model
    PlaceSelected,
    /// Place a model by id
    Place(String),
    /// Change the catalog selection by index
    SelectModel(usize),
    /// Pan callback with the finger movement in pixels
    Pan {
        /// Recognizer state
        phase: GesturePhase,
        /// Screen-space movement since the previous callback
        delta: [f32; 2],
    },
    /// Pinch callback with the cumulative scale
    Pinch {
        /// Recognizer state
        phase: GesturePhase,
        /// Scale since gesture-begin
        scale: f32,
    },
    /// Rotation callback with the cumulative angle
    Rotate {
        /// Recognizer state
        phase: GesturePhase,
        /// Radians since gesture-begin
        angle: f32,
    },
    /// Plane anchor update
    Plane {
        /// World Y of the plane
        height: f32,
        /// Horizontal extent
        #[serde(default = "default_extent")]
        extent: [f32; 2],
    },
    /// Press the spin control
    Spin,
    /// Advance animations by this many seconds
    Tick(f32),
}

fn default_extent() -> [f32; 2] {
    [1.0, 1.0]
}

/// A recorded sequence of host events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Events in delivery order
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    /// Load a script from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScriptError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse a script from RON text
    pub fn from_ron(content: &str) -> Result<Self, ScriptError> {
        ron::from_str(content).map_err(|e| ScriptError::Deserialize(e.to_string()))
    }
}

/// Final state of one placed object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectReport {
    /// Object handle
    pub handle: ObjectHandle,
    /// Model id
    pub model_id: String,
    /// Final pose
    pub pose: Pose,
    /// Final world matrix (column-major)
    pub world_transform: Mat4,
}

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Number of steps executed
    pub steps: usize,
    /// Selected object at the end of the replay
    pub selected: Option<ObjectHandle>,
    /// Every placed object, in placement order
    pub objects: Vec<ObjectReport>,
}

/// Drives a viewer through a script with its own recognizers
pub struct Replayer<'a> {
    viewer: Viewer,
    loader: &'a dyn ModelLoader,
    pan: PanRecognizer,
    pinch: PinchRecognizer,
    rotation: RotationRecognizer,
    placed: Vec<ObjectHandle>,
}

impl<'a> Replayer<'a> {
    /// Create a replayer around `viewer`
    pub fn new(viewer: Viewer, loader: &'a dyn ModelLoader) -> Self {
        Self {
            viewer,
            loader,
            pan: PanRecognizer::new(),
            pinch: PinchRecognizer::new(),
            rotation: RotationRecognizer::new(),
            placed: Vec::new(),
        }
    }

    /// The driven viewer
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Execute one step
    ///
    /// Failed placements are logged and skipped like a live host would; only
    /// script-level problems are errors.
    pub fn step(&mut self, step: &ReplayStep) -> Result<(), ScriptError> {
        match step {
            ReplayStep::PlaceSelected => {
                let result = self.viewer.place_selected(self.loader);
                self.record_placement(result);
            }
            ReplayStep::Place(model) => {
                let result = self.viewer.place_model(model, self.loader);
                self.record_placement(result);
            }
            ReplayStep::SelectModel(index) => {
                if *index >= self.viewer.catalog().len() {
                    return Err(ScriptError::InvalidStep(format!(
                        "catalog index {} out of range (catalog has {} models)",
                        index,
                        self.viewer.catalog().len()
                    )));
                }
                self.viewer.catalog_mut().select(*index);
            }
            ReplayStep::Pan { phase, delta } => {
                let event = self.pan.report(*phase, Vec2::from(*delta));
                self.viewer.dispatch(&mut self.pan, event);
            }
            ReplayStep::Pinch { phase, scale } => {
                let event = self.pinch.report(*phase, *scale);
                self.viewer.dispatch(&mut self.pinch, event);
            }
            ReplayStep::Rotate { phase, angle } => {
                let event = self.rotation.report(*phase, *angle);
                self.viewer.dispatch(&mut self.rotation, event);
            }
            ReplayStep::Plane { height, extent } => {
                self.viewer
                    .handle_plane_update(PlaneAnchor::new(*height, Vec2::from(*extent)));
            }
            ReplayStep::Spin => {
                if let Err(e) = self.viewer.spin_selected() {
                    tracing::debug!("Spin ignored: {}", e);
                }
            }
            ReplayStep::Tick(dt) => {
                self.viewer.tick(*dt);
            }
        }
        Ok(())
    }

    fn record_placement(&mut self, result: Result<ObjectHandle, ManipulationError>) {
        match result {
            Ok(handle) => self.placed.push(handle),
            Err(e) => tracing::warn!("Placement skipped: {}", e),
        }
    }

    /// Execute every step of `script`
    pub fn run(&mut self, script: &ReplayScript) -> Result<ReplayReport, ScriptError> {
        for (index, step) in script.steps.iter().enumerate() {
            tracing::debug!("Replay step {}: {:?}", index, step);
            self.step(step)?;
        }
        Ok(self.report(script.steps.len()))
    }

    /// Snapshot the current scene
    pub fn report(&self, steps: usize) -> ReplayReport {
        let objects = self
            .placed
            .iter()
            .filter_map(|handle| self.viewer.scene().get(*handle))
            .map(|object| ObjectReport {
                handle: object.handle,
                model_id: object.model_id.clone(),
                pose: object.pose,
                world_transform: object.world_transform(),
            })
            .collect();

        ReplayReport {
            steps,
            selected: self.viewer.selected(),
            objects,
        }
    }
}

/// Replay-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScriptError {
    /// Reading the script failed
    #[error("IO error: {0}")]
    Io(String),
    /// The script is not valid RON for this schema
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// A step cannot be executed
    #[error("Invalid step: {0}")]
    InvalidStep(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    use crate::loader::MemoryLoader;

    const SCENARIO: &str = r#"(
        steps: [
            PlaceSelected,
            Pan(phase: Began, delta: (100.0, 50.0)),
            Pan(phase: Ended, delta: (0.0, 0.0)),
            Pinch(phase: Began, scale: 1.0),
            Pinch(phase: Changed, scale: 2.0),
            Pinch(phase: Ended, scale: 2.0),
            Plane(height: -1.2),
        ],
    )"#;

    #[test]
    fn test_scenario_script() {
        let loader = MemoryLoader::with_placeholders(["toycar"]);
        let script = ReplayScript::from_ron(SCENARIO).unwrap();
        let mut replayer = Replayer::new(Viewer::default(), &loader);

        let report = replayer.run(&script).unwrap();
        assert_eq!(report.steps, 7);
        assert_eq!(report.objects.len(), 1);

        let object = &report.objects[0];
        assert_eq!(object.model_id, "toycar");
        assert_eq!(report.selected, Some(object.handle));
        assert!(object.pose.position.abs_diff_eq(Vec3::new(0.1, -1.2, -2.95), 1e-5));
        assert!(object.pose.scale.abs_diff_eq(Vec3::splat(0.1), 1e-6));
    }

    #[test]
    fn test_demo_script() {
        let source = include_str!("../../../demos/place_and_manipulate.ron");
        let script = ReplayScript::from_ron(source).unwrap();
        let loader = MemoryLoader::with_placeholders(["toycar"]);
        let mut replayer = Replayer::new(Viewer::default(), &loader);

        let report = replayer.run(&script).unwrap();
        let pose = report.objects[0].pose;
        assert!(pose.position.abs_diff_eq(Vec3::new(0.1, -1.2, -2.95), 1e-5));
        assert!(pose.scale.abs_diff_eq(Vec3::splat(0.1), 1e-6));

        let expected = Quat::from_rotation_y(0.5 + std::f32::consts::FRAC_PI_4);
        assert!(pose.orientation.dot(expected).abs() > 1.0 - 1e-5);
        assert!(!replayer.viewer().is_spinning());
    }

    #[test]
    fn test_failed_placement_is_skipped() {
        let loader = MemoryLoader::new();
        let script = ReplayScript {
            steps: vec![
                ReplayStep::Place("toycar".to_string()),
                ReplayStep::Spin,
                ReplayStep::Tick(1.0),
            ],
        };
        let mut replayer = Replayer::new(Viewer::default(), &loader);

        let report = replayer.run(&script).unwrap();
        assert!(report.objects.is_empty());
        assert!(report.selected.is_none());
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        let loader = MemoryLoader::new();
        let mut replayer = Replayer::new(Viewer::default(), &loader);
        let result = replayer.step(&ReplayStep::SelectModel(12));
        assert!(matches!(result, Err(ScriptError::InvalidStep(_))));
    }

    #[test]
    fn test_malformed_script() {
        assert!(matches!(
            ReplayScript::from_ron("(steps: [Wobble])"),
            Err(ScriptError::Deserialize(_))
        ));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let loader = MemoryLoader::with_placeholders(["chair_swan"]);
        let script = ReplayScript {
            steps: vec![ReplayStep::SelectModel(1), ReplayStep::PlaceSelected],
        };
        let mut replayer = Replayer::new(Viewer::default(), &loader);
        let report = replayer.run(&script).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["objects"][0]["model_id"], "chair_swan");
        assert_eq!(json["steps"], 2);
    }
}
