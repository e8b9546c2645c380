//! Highlight categories
//!
//! This module defines the semantic categories a token can be
//! formatted as, and the fixed order in which rules for them are
//! compiled and applied.

/// Semantic categories for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Language keywords (def, return, if, ...)
    Keyword,
    /// String literals
    String,
    /// Line comments (# or //)
    Comment,
    /// Integer literals
    Number,
    /// Call-like identifiers
    Function,
    /// Module and package names
    Import,
    /// Identifiers being assigned to
    Variable,
    /// Built-in scalar and collection type names
    Builtin,
}

impl Category {
    /// Compilation order. Spans are painted last-write-wins, so this is
    /// also the priority order: later categories win on shared bytes.
    pub const ORDER: [Category; 8] = [
        Category::Keyword,
        Category::String,
        Category::Comment,
        Category::Number,
        Category::Function,
        Category::Import,
        Category::Variable,
        Category::Builtin,
    ];

    /// Get the rule-set key for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Number => "number",
            Category::Function => "function",
            Category::Import => "import",
            Category::Variable => "variable",
            Category::Builtin => "builtin",
        }
    }

    /// Parse a category from its rule-set key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(Category::Keyword),
            "string" => Some(Category::String),
            "comment" => Some(Category::Comment),
            "number" => Some(Category::Number),
            "function" => Some(Category::Function),
            "import" => Some(Category::Import),
            "variable" => Some(Category::Variable),
            "builtin" => Some(Category::Builtin),
            _ => None,
        }
    }

    /// Keywords render bold
    pub fn is_bold(&self) -> bool {
        matches!(self, Category::Keyword)
    }

    /// Functions render italic
    pub fn is_italic(&self) -> bool {
        matches!(self, Category::Function)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
