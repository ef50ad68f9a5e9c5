//! Serialization for project calibration and sheet cut lists.
//!
//! Implements save/load for .skproj project files using JSON, storing the
//! calibration and per-sheet records verbatim — no schema transformation
//! happens here, so documents written by older builds keep loading through
//! the serde defaults.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use sheetkit_core::CalibrationState;

use crate::cuts::CutList;
use crate::placement::SheetPlacement;

/// Project file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub calibration: CalibrationState,
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// One sheet's persisted geometry: extent, canvas placement, and cut list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEntry {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub placement: SheetPlacement,
    #[serde(default)]
    pub cuts: CutList,
}

impl ProjectFile {
    /// Creates an empty project document stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            calibration: CalibrationState::default(),
            sheets: Vec::new(),
        }
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project document")
    }

    /// Parses a document from JSON.
    pub fn from_json_string(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse project document")
    }

    /// Writes the document to disk, refreshing the modified timestamp.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.modified_now();
        let json = self.to_json_string()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write project file: {}", path.display()))?;
        Ok(())
    }

    /// Loads a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        Self::from_json_string(&json)
    }

    fn modified_now(&mut self) {
        self.metadata.modified = Utc::now();
    }
}
