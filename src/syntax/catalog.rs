//! Per-language word lists
//!
//! Each language may ship three lists (keywords, functions, imports)
//! as JSON arrays. Entries are either bare strings or records with a
//! `word` field; anything else in a list is skipped.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;

use super::language::LanguageId;
use super::source::{language_resource, read_json, ResourceSource};

/// A set of literal words for one category
///
/// Duplicates collapse. Iteration order is sorted, which keeps compiled
/// rule sequences reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word as given; empty words are ignored
    pub fn insert(&mut self, word: &str) {
        if !word.is_empty() {
            self.words.insert(word.to_string());
        }
    }

    /// Check membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate words
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a list from a parsed JSON document
    ///
    /// Returns an empty list when the document is not an array.
    fn from_json(resource: &str, value: Value) -> Self {
        let Value::Array(items) = value else {
            tracing::warn!(resource, "word list is not an array");
            return Self::new();
        };

        let mut list = Self::new();
        for item in &items {
            match item {
                Value::String(word) => list.insert(word),
                Value::Object(record) => match record.get("word") {
                    Some(Value::String(word)) => list.insert(word),
                    _ => tracing::debug!(resource, "skipping record without a word"),
                },
                other => tracing::debug!(resource, entry = %other, "skipping entry"),
            }
        }
        list
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word);
        }
        list
    }
}

/// The three word lists of one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    pub keywords: WordList,
    pub functions: WordList,
    pub imports: WordList,
}

/// Loads word lists from a resource source
///
/// Nothing is cached: every `load` reads the resources again.
#[derive(Clone)]
pub struct LanguageCatalog {
    source: Arc<dyn ResourceSource>,
}

impl LanguageCatalog {
    /// Create a catalog over a resource source
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    /// Load all three lists for a language
    pub fn load(&self, language: &LanguageId) -> WordLists {
        let lists = WordLists {
            keywords: self.load_list(language, "keywords"),
            functions: self.load_list(language, "functions"),
            imports: self.load_list(language, "imports"),
        };
        tracing::debug!(
            %language,
            keywords = lists.keywords.len(),
            functions = lists.functions.len(),
            imports = lists.imports.len(),
            "loaded word lists"
        );
        lists
    }

    fn load_list(&self, language: &LanguageId, kind: &str) -> WordList {
        let name = match language_resource(language, &format!("{kind}.json")) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("{}", e);
                return WordList::new();
            }
        };
        read_json::<Value>(self.source.as_ref(), &name)
            .map(|value| WordList::from_json(&name, value))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for LanguageCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageCatalog").finish_non_exhaustive()
    }
}
