use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use uuid::Uuid;

use crate::item::Item;

/// Whole-collection persistence in a single JSON document.
///
/// Every mutation is read-modify-write of the full array. There is no
/// locking: two overlapping writers can lose an update.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every item.
    ///
    /// # Returns
    /// * `Ok(items)` - Parsed collection, empty if the file does not exist yet
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid item array
    pub async fn read_all(&self) -> Result<Vec<Item>> {
        let contents = match fs::read_to_string(self.path()).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Data file {} not found, using empty collection", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read data file {}", self.path.display()));
            }
        };

        let items: Vec<Item> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse data file {}", self.path.display()))?;

        tracing::debug!("Read {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Replace the persisted collection with `items`.
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// target, so readers see either the old or the new collection.
    ///
    /// # Errors
    /// Returns an error if serialization, the write, or the rename fails
    pub async fn write_all(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string_pretty(items).context("Failed to serialize items")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json)
            .await
            .with_context(|| format!("Failed to write data file {}", temp_path.display()))?;
        fs::rename(&temp_path, self.path())
            .await
            .with_context(|| format!("Failed to replace data file {}", self.path.display()))?;

        tracing::debug!("Wrote {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Whether the data file is currently present
    pub async fn exists(&self) -> bool {
        fs::try_exists(self.path()).await.unwrap_or(false)
    }

    /// Unique sibling path, so overlapping writers never share a temp file
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("items.json"));
        name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        self.path.with_file_name(name)
    }
}
