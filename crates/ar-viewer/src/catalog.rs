//! Selectable model catalog

use serde::{Deserialize, Serialize};

/// A model the user can pick, shown by its emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Emoji shown in the picker
    pub emoji: String,
    /// Asset identifier passed to the model loader
    pub model_id: String,
}

impl ModelEntry {
    /// Create a catalog entry
    pub fn new(emoji: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            model_id: model_id.into(),
        }
    }

    /// Models bundled with the app
    pub fn defaults() -> Vec<ModelEntry> {
        vec![
            ModelEntry::new("🚗", "toycar"),
            ModelEntry::new("🪑", "chair_swan"),
            ModelEntry::new("📻", "gramophone"),
            ModelEntry::new("☕️", "cup_saucer_set"),
        ]
    }
}

/// Ordered model list with a single selection
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
    selected: usize,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new(ModelEntry::defaults())
    }
}

impl ModelCatalog {
    /// Create a catalog with the first entry selected
    pub fn new(entries: Vec<ModelEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    /// All entries in display order
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currently selected entry (None for an empty catalog)
    pub fn selected(&self) -> Option<&ModelEntry> {
        self.entries.get(self.selected)
    }

    /// Index of the selected entry
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> Option<&ModelEntry> {
        if index < self.entries.len() {
            self.selected = index;
        }
        self.selected()
    }

    /// Select by model id
    pub fn select_model(&mut self, model_id: &str) -> Option<&ModelEntry> {
        let index = self.entries.iter().position(|e| e.model_id == model_id)?;
        self.select(index)
    }

    /// Advance the selection, wrapping to the first entry
    pub fn next(&mut self) -> Option<&ModelEntry> {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
        self.selected()
    }

    /// Move the selection back, wrapping to the last entry
    pub fn previous(&mut self) -> Option<&ModelEntry> {
        if !self.entries.is_empty() {
            self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
        }
        self.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = ModelCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.selected().unwrap().model_id, "toycar");
    }

    #[test]
    fn test_selection_wraps() {
        let mut catalog = ModelCatalog::default();
        assert_eq!(catalog.previous().unwrap().model_id, "cup_saucer_set");
        assert_eq!(catalog.next().unwrap().model_id, "toycar");
        catalog.next();
        assert_eq!(catalog.selected().unwrap().model_id, "chair_swan");
    }

    #[test]
    fn test_select_by_index_and_id() {
        let mut catalog = ModelCatalog::default();
        assert_eq!(catalog.select(2).unwrap().model_id, "gramophone");
        // Out of range keeps the current selection
        assert_eq!(catalog.select(9).unwrap().model_id, "gramophone");
        assert_eq!(catalog.select_model("chair_swan").unwrap().emoji, "🪑");
        assert!(catalog.select_model("piano").is_none());
        assert_eq!(catalog.selected_index(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = ModelCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.next().is_none());
        assert!(catalog.previous().is_none());
        assert!(catalog.selected().is_none());
    }
}
