//! Export-directory persistence for generated models
//!
//! Each saved model gets a unique timestamped filename next to an
//! `index.json` holding its metadata. The index is the source of truth for
//! listing; entries whose files disappear are pruned on the next list.

use crate::domain::ModelKind;
use crate::metadata::ModelMetadata;
use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.json";

/// Metadata persisted per saved file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub filename: String,
    pub model_type: ModelKind,
    pub dimensions: serde_json::Value,
    pub triangles: usize,
    pub size_bytes: u64,
    /// RFC 3339 local timestamp
    pub created_at: String,
}

/// File storage rooted at an export directory
#[derive(Debug)]
pub struct Storage {
    export_dir: PathBuf,
    index: BTreeMap<String, FileMetadata>,
}

impl Storage {
    /// Open (creating if needed) the export directory and load its index.
    /// A missing or unreadable index starts empty rather than failing.
    pub fn open(export_dir: &Path) -> Result<Self> {
        fs::create_dir_all(export_dir).with_context(|| {
            format!("Failed to create export directory: {}", export_dir.display())
        })?;

        let index = match fs::read_to_string(export_dir.join(INDEX_FILE)) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };

        Ok(Self {
            export_dir: export_dir.to_path_buf(),
            index,
        })
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Save STL content under a unique name and record it in the index
    pub fn save(&mut self, stl: &str, metadata: &ModelMetadata) -> Result<FileMetadata> {
        let filename = unique_filename(&metadata.base_filename());
        let path = self.export_dir.join(&filename);

        fs::write(&path, stl)
            .with_context(|| format!("Failed to write STL file: {}", path.display()))?;
        let size_bytes = fs::metadata(&path)
            .with_context(|| format!("Failed to stat STL file: {}", path.display()))?
            .len();

        let entry = FileMetadata {
            filename: filename.clone(),
            model_type: metadata.model_type,
            dimensions: serde_json::to_value(metadata.dimensions)?,
            triangles: metadata.triangles,
            size_bytes,
            created_at: Local::now().to_rfc3339(),
        };

        self.index.insert(filename, entry.clone());
        self.save_index()?;

        Ok(entry)
    }

    /// List stored models, newest first. Index entries whose files no
    /// longer exist are dropped.
    pub fn list(&mut self) -> Result<Vec<FileMetadata>> {
        let missing: Vec<String> = self
            .index
            .keys()
            .filter(|name| !self.export_dir.join(name.as_str()).exists())
            .cloned()
            .collect();

        if !missing.is_empty() {
            for name in &missing {
                self.index.remove(name);
            }
            self.save_index()?;
        }

        let mut files: Vec<FileMetadata> = self.index.values().cloned().collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    /// Resolve a stored filename to its path, if indexed and present
    pub fn path_of(&self, filename: &str) -> Option<PathBuf> {
        let path = self.export_dir.join(filename);
        (self.index.contains_key(filename) && path.exists()).then_some(path)
    }

    /// Keep only the newest `max_files` models; returns how many were removed
    pub fn cleanup(&mut self, max_files: usize) -> Result<usize> {
        let files = self.list()?;
        if files.len() <= max_files {
            return Ok(0);
        }

        let stale = &files[max_files..];
        for entry in stale {
            let path = self.export_dir.join(&entry.filename);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
            self.index.remove(&entry.filename);
        }
        self.save_index()?;

        Ok(stale.len())
    }

    fn save_index(&self) -> Result<()> {
        let path = self.export_dir.join(INDEX_FILE);
        let contents = serde_json::to_string_pretty(&self.index)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write index: {}", path.display()))
    }
}

/// Append a timestamp to the base filename, keeping the extension.
/// The stem is restricted to filesystem-safe characters.
fn unique_filename(base: &str) -> String {
    let (stem, ext) = base.rsplit_once('.').unwrap_or((base, "stl"));
    let stem: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{stem}_{timestamp}.{ext}")
}
