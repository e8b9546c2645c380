//! Extension to language resolution

use std::collections::HashMap;
use std::path::Path;

use super::language::LanguageId;
use super::source::{read_json, ResourceSource};

/// Resource name of the extension manifest
pub const MANIFEST: &str = "manifest.json";

/// Maps file extensions (".py") to language ids
///
/// Resolution never fails: a missing manifest, a missing entry or a path
/// without an extension all resolve to the default language.
#[derive(Debug, Clone)]
pub struct ExtensionResolver {
    /// Normalised extension (lowercase, leading dot) to language
    table: HashMap<String, LanguageId>,
    /// Fallback language
    default: LanguageId,
}

impl ExtensionResolver {
    /// Create a resolver from an extension table
    pub fn new(table: HashMap<String, String>, default: LanguageId) -> Self {
        let table = table
            .into_iter()
            .map(|(ext, lang)| (normalize_extension(&ext), LanguageId::from(lang)))
            .collect();
        Self { table, default }
    }

    /// Load the manifest from a resource source
    pub fn load(source: &dyn ResourceSource, default: LanguageId) -> Self {
        let table: HashMap<String, String> = read_json(source, MANIFEST).unwrap_or_default();
        tracing::debug!(entries = table.len(), "loaded extension manifest");
        Self::new(table, default)
    }

    /// Resolve a file path to a language id
    pub fn resolve(&self, path: &Path) -> LanguageId {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.table.get(&normalize_extension(ext)))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// List the distinct languages the manifest knows about, sorted
    pub fn languages(&self) -> Vec<&LanguageId> {
        let mut langs: Vec<_> = self.table.values().collect();
        langs.sort();
        langs.dedup();
        langs
    }
}

impl Default for ExtensionResolver {
    fn default() -> Self {
        Self::new(HashMap::new(), LanguageId::default())
    }
}

/// Lowercase an extension and give it a leading dot
fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
