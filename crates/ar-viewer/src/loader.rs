//! Model asset loading
//!
//! Assets are opaque to the viewer: a loader resolves a model id to its bytes
//! and the rendering engine decodes them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extension of bundled model assets
pub const MODEL_EXTENSION: &str = "usdz";

/// A loaded, still-encoded model asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAsset {
    /// Identifier the asset was loaded under
    pub model_id: String,
    /// File the asset came from, if any
    pub path: Option<PathBuf>,
    /// Encoded asset bytes
    pub data: Vec<u8>,
}

impl ModelAsset {
    /// Size of the encoded asset
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Resolves model identifiers to assets
pub trait ModelLoader {
    /// Load the asset for `model_id`
    fn load(&self, model_id: &str) -> Result<ModelAsset, LoadError>;
}

/// Loads `<root>/<model_id>.usdz`
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path an asset is expected at
    ///
    /// `None` for ids that would resolve outside the root (empty, containing
    /// a path separator or `..`).
    pub fn asset_path(&self, model_id: &str) -> Option<PathBuf> {
        let escapes = model_id.is_empty()
            || model_id.contains(['/', '\\'])
            || model_id.contains("..");
        if escapes {
            return None;
        }
        Some(self.root.join(format!("{model_id}.{MODEL_EXTENSION}")))
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ModelLoader for DirectoryLoader {
    fn load(&self, model_id: &str) -> Result<ModelAsset, LoadError> {
        let Some(path) = self.asset_path(model_id) else {
            tracing::warn!("Rejected model id '{}'", model_id);
            return Err(LoadError::NotFound(model_id.to_string()));
        };
        if !path.is_file() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let data = std::fs::read(&path).map_err(|e| LoadError::Io(e.to_string()))?;
        if data.is_empty() {
            return Err(LoadError::Empty(path.display().to_string()));
        }

        tracing::debug!("Read {} bytes for model '{}'", data.len(), model_id);
        Ok(ModelAsset {
            model_id: model_id.to_string(),
            path: Some(path),
            data,
        })
    }
}

/// In-memory asset table
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register placeholder bytes for each id
    pub fn with_placeholders<'a>(model_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut loader = Self::new();
        for id in model_ids {
            loader.insert(id, id.as_bytes().to_vec());
        }
        loader
    }

    /// Register an asset
    pub fn insert(&mut self, model_id: impl Into<String>, data: Vec<u8>) {
        self.assets.insert(model_id.into(), data);
    }
}

impl ModelLoader for MemoryLoader {
    fn load(&self, model_id: &str) -> Result<ModelAsset, LoadError> {
        let data = self
            .assets
            .get(model_id)
            .ok_or_else(|| LoadError::NotFound(model_id.to_string()))?;
        if data.is_empty() {
            return Err(LoadError::Empty(model_id.to_string()));
        }
        Ok(ModelAsset {
            model_id: model_id.to_string(),
            path: None,
            data: data.clone(),
        })
    }
}

/// Model loading errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// No asset exists for the id
    #[error("Model asset not found: {0}")]
    NotFound(String),
    /// The asset exists but has no content
    #[error("Model asset is empty: {0}")]
    Empty(String),
    /// Reading the asset failed
    #[error("IO error: {0}")]
    Io(String),
}
