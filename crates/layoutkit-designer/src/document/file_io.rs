//! Load and save documents as JSON.

use std::path::Path;

use layoutkit_core::Result;

use super::Document;

impl Document {
    /// Parses a document and fits its groups to their children.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: Document = serde_json::from_str(json)?;
        doc.fit_all_groups()?;
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let doc = Self::from_json(&content)?;
        tracing::info!(path = %path.as_ref().display(), pages = doc.pages.len(), "Loaded document");
        Ok(doc)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        tracing::info!(path = %path.as_ref().display(), "Saved document");
        Ok(())
    }
}
