//! Language identifiers

use std::fmt;

/// An opaque, case-sensitive language key (e.g. "python")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageId(String);

impl LanguageId {
    /// The language used whenever nothing better is known
    pub const DEFAULT: &'static str = "python";

    /// Create a language id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for LanguageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LanguageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
