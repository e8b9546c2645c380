//! Resource sources
//!
//! The catalog, resolver and rule-set table never touch fixed paths.
//! They read named resources (e.g. `python/keywords.json`) through a
//! `ResourceSource` handed to them at construction.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::language::LanguageId;
use crate::error::{HighlightError, Result};

/// Something that can produce the raw text of a named resource
pub trait ResourceSource: Send + Sync {
    /// Read a resource. `Ok(None)` means it does not exist, which is
    /// not an error.
    fn read(&self, name: &str) -> Result<Option<String>>;
}

/// Resources stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirSource {
    fn read(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Resources held in memory, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a resource
    pub fn with(mut self, name: &str, contents: &str) -> Self {
        self.insert(name, contents);
        self
    }

    /// Add or replace a resource
    pub fn insert(&mut self, name: &str, contents: &str) {
        self.resources.insert(name.to_string(), contents.to_string());
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.resources.get(name).cloned())
    }
}

/// Build the name of a per-language resource, e.g. `python/imports.json`
///
/// Language ids come from user data, so anything that could step
/// outside the language's own directory is rejected.
pub fn language_resource(language: &LanguageId, file: &str) -> Result<String> {
    let id = language.as_str();
    let escapes = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', ':'])
        || Path::new(id).is_absolute();
    if escapes {
        return Err(HighlightError::InvalidResourceName(id.to_string()));
    }
    Ok(format!("{id}/{file}"))
}

/// Read and parse a JSON resource, reporting every failure
pub fn fetch_json<T: DeserializeOwned>(source: &dyn ResourceSource, name: &str) -> Result<Option<T>> {
    let Some(text) = source.read(name)? else {
        return Ok(None);
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| HighlightError::Malformed {
            resource: name.to_string(),
            source,
        })
}

/// Read and parse a JSON resource, degrading every failure to `None`
pub fn read_json<T: DeserializeOwned>(source: &dyn ResourceSource, name: &str) -> Option<T> {
    match fetch_json(source, name) {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            tracing::debug!(resource = name, "resource missing");
            None
        }
        Err(e) => {
            tracing::warn!(resource = name, "ignoring resource: {}", e);
            None
        }
    }
}
