// Copyright 2025 Cowboy AI, LLC.

//! Taxonomy sources
//!
//! Loading is the only I/O in the crate and the only async boundary; it is
//! resolved before classification starts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::{LexiconError, LexiconResult};
use crate::taxonomy::Taxonomy;

/// Taxonomy location used when none is configured
pub const DEFAULT_TAXONOMY_PATH: &str = "dicts/hierarchy.json";

/// Something a taxonomy can be loaded from
#[async_trait]
pub trait TaxonomySource: Send + Sync {
    /// Identifier used in logs and errors
    fn source_id(&self) -> String;

    /// Load and decode the taxonomy
    async fn load(&self) -> LexiconResult<Taxonomy>;
}

/// A JSON document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source for `path`, looked up next to the running executable when a
    /// relative path does not exist under the working directory
    pub fn located(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(resolve_against(&path, exe_dir.as_deref()))
    }

    /// Path this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `path` as given if it is absolute or exists; otherwise `base/path` when
/// that exists; otherwise `path` unchanged so the load error names it.
pub fn resolve_against(path: &Path, base: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    match base.map(|dir| dir.join(path)) {
        Some(candidate) if candidate.exists() => {
            debug!(path = %candidate.display(), "taxonomy found beside executable");
            candidate
        }
        _ => path.to_path_buf(),
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_TAXONOMY_PATH)
    }
}

#[async_trait]
impl TaxonomySource for JsonFileSource {
    fn source_id(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> LexiconResult<Taxonomy> {
        let id = self.source_id();
        debug!(path = %id, "reading taxonomy");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LexiconError::data_source(&id, e.to_string()))?;
        let taxonomy = Taxonomy::from_json_str(&id, &raw)?;
        info!(
            path = %id,
            groups = taxonomy.groups().count(),
            depth = taxonomy.depth(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }
}

/// A JSON document already in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineJsonSource {
    name: String,
    json: String,
}

impl InlineJsonSource {
    /// Source decoding `json`, reported under `name`
    pub fn new(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }
}

#[async_trait]
impl TaxonomySource for InlineJsonSource {
    fn source_id(&self) -> String {
        self.name.clone()
    }

    async fn load(&self) -> LexiconResult<Taxonomy> {
        Taxonomy::from_json_str(&self.name, &self.json)
    }
}
