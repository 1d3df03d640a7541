// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::serebii::models::CatalogEntry;
use crate::utils::error::StorageError;
use crate::utils::html_debug;

/// Aggregate file written at the end of a full run.
pub const AGGREGATE_FILE_NAME: &str = "gen1_pokedex.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base>/<id>/`
    pub fn entry_dir(&self, id: &str) -> PathBuf {
        self.base_dir.join(id)
    }

    /// Writes one record to `<base>/<id>/<id>.json`.
    pub fn save_entry(&self, entry: &CatalogEntry) -> Result<PathBuf, StorageError> {
        let target_dir = self.entry_dir(&entry.id);
        fs::create_dir_all(&target_dir)?;

        let file_path = target_dir.join(format!("{}.json", entry.id));
        write_json(&file_path, entry)?;

        tracing::debug!("Saved entry to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes all records, in the order given, to `<base>/gen1_pokedex.json`.
    pub fn save_batch(&self, entries: &[CatalogEntry]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(AGGREGATE_FILE_NAME);
        write_json(&file_path, &entries)?;

        tracing::info!("Saved {} entries to {}", entries.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes a downloaded sprite to `<base>/<id>/sprites/<file_name>`.
    pub fn save_asset(&self, id: &str, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        let target_dir = self.entry_dir(id).join("sprites");
        fs::create_dir_all(&target_dir)?;

        let file_path = target_dir.join(file_name);
        fs::write(&file_path, bytes)?;
        Ok(file_path)
    }

    /// Saves the raw page and an annotated copy under `<base>/<id>/debug/`.
    pub fn save_debug_page(&self, id: &str, html: &str) -> Result<PathBuf, StorageError> {
        let debug_dir = self.entry_dir(id).join("debug");
        fs::create_dir_all(&debug_dir)?;

        fs::write(debug_dir.join("page.html"), html)?;
        html_debug::create_debug_html(html, &debug_dir.join("page_annotated.html"))?;
        Ok(debug_dir)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
