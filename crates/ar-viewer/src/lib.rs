//! AR model viewer host
//!
//! Owns the placed objects, routes recognizer callbacks and plane updates
//! into [`ar_core`], and replays recorded event scripts.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod recognizer;
pub mod replay;
pub mod scene;
pub mod viewer;

// Re-exports for convenience
pub use catalog::{ModelCatalog, ModelEntry};
pub use config::{ConfigError, ViewerConfig};
pub use loader::{DirectoryLoader, LoadError, MemoryLoader, ModelAsset, ModelLoader};
pub use recognizer::{PanRecognizer, PinchRecognizer, Recognizer, RotationRecognizer};
pub use replay::{ReplayReport, ReplayScript, ReplayStep, Replayer, ScriptError};
pub use scene::{DirectionalLight, Scene, SceneObject};
pub use viewer::{SharedViewer, Viewer};
