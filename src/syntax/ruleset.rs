//! Rule sets: which categories a language highlights, and in what color

use std::collections::HashMap;

use super::category::Category;
use super::language::LanguageId;
use super::source::{read_json, ResourceSource};

/// Resource name of the rule-set table
pub const RULE_SETS: &str = "highlight.json";

/// Category to color mapping for one language
///
/// Categories missing from the set get no rules at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    colors: HashMap<Category, String>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the color of a category
    pub fn with(mut self, category: Category, color: &str) -> Self {
        self.insert(category, color);
        self
    }

    /// Set the color of a category
    pub fn insert(&mut self, category: Category, color: &str) {
        self.colors.insert(category, color.to_string());
    }

    /// Build from raw category names, ignoring names we don't know
    pub fn from_names(raw: HashMap<String, String>) -> Self {
        let mut set = Self::new();
        for (name, color) in raw {
            match Category::from_name(&name) {
                Some(category) => set.insert(category, &color),
                None => tracing::debug!(category = %name, "ignoring unknown category"),
            }
        }
        set
    }

    /// Get the color of a category, if it is highlighted
    pub fn color(&self, category: Category) -> Option<&str> {
        self.colors.get(&category).map(String::as_str)
    }

    /// Check if a category is highlighted
    pub fn contains(&self, category: Category) -> bool {
        self.colors.contains_key(&category)
    }

    /// Highlighted categories, in compilation order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ORDER.into_iter().filter(|c| self.contains(*c))
    }

    /// Check if nothing is highlighted
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Rule sets for every configured language
#[derive(Debug, Clone)]
pub struct RuleSetTable {
    sets: HashMap<LanguageId, RuleSet>,
    default: LanguageId,
    empty: RuleSet,
}

impl RuleSetTable {
    /// Create a table from explicit rule sets
    pub fn new(sets: HashMap<LanguageId, RuleSet>, default: LanguageId) -> Self {
        Self {
            sets,
            default,
            empty: RuleSet::new(),
        }
    }

    /// Load the table from a resource source, falling back to the
    /// built-in table when the resource is missing or malformed
    pub fn load(source: &dyn ResourceSource, default: LanguageId) -> Self {
        let Some(raw) = read_json::<HashMap<String, HashMap<String, String>>>(source, RULE_SETS) else {
            return Self::builtin(default);
        };
        let sets = raw
            .into_iter()
            .map(|(lang, colors)| (LanguageId::from(lang), RuleSet::from_names(colors)))
            .collect();
        Self::new(sets, default)
    }

    /// The built-in table (python and php)
    pub fn builtin(default: LanguageId) -> Self {
        let python = RuleSet::new()
            .with(Category::Keyword, "#82aaff")
            .with(Category::String, "#c3e88d")
            .with(Category::Comment, "#676e95")
            .with(Category::Function, "#ffcb6b")
            .with(Category::Variable, "#f78c6c")
            .with(Category::Number, "#f78c6c")
            .with(Category::Builtin, "#b2ccd6");
        let php = RuleSet::new()
            .with(Category::Keyword, "#ff5370")
            .with(Category::String, "#c3e88d")
            .with(Category::Comment, "#546e7a")
            .with(Category::Function, "#82aaff")
            .with(Category::Variable, "#f78c6c")
            .with(Category::Number, "#f78c6c")
            .with(Category::Builtin, "#b2ccd6");

        let mut sets = HashMap::new();
        sets.insert(LanguageId::from("python"), python);
        sets.insert(LanguageId::from("php"), php);
        Self::new(sets, default)
    }

    /// Get the rule set for a language, falling back to the default
    /// language's set and then to an empty set
    pub fn get(&self, language: &LanguageId) -> &RuleSet {
        self.sets
            .get(language)
            .or_else(|| self.sets.get(&self.default))
            .unwrap_or(&self.empty)
    }

    /// List configured languages, sorted
    pub fn languages(&self) -> Vec<&LanguageId> {
        let mut langs: Vec<_> = self.sets.keys().collect();
        langs.sort();
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::source::MemorySource;

    #[test]
    fn test_categories_follow_fixed_order() {
        let set = RuleSet::new()
            .with(Category::Builtin, "#1")
            .with(Category::Keyword, "#2")
            .with(Category::Variable, "#3");
        assert_eq!(
            set.categories().collect::<Vec<_>>(),
            [Category::Keyword, Category::Variable, Category::Builtin]
        );
    }

    #[test]
    fn test_from_names_ignores_unknown() {
        let mut raw = HashMap::new();
        raw.insert("keyword".to_string(), "#82aaff".to_string());
        raw.insert("operator".to_string(), "#ffffff".to_string());
        let set = RuleSet::from_names(raw);
        assert_eq!(set.color(Category::Keyword), Some("#82aaff"));
        assert_eq!(set.categories().count(), 1);
    }

    #[test]
    fn test_language_fallback() {
        let source = MemorySource::new().with(
            RULE_SETS,
            r##"{"python": {"keyword": "#111"}, "rust": {"keyword": "#222", "import": "#333"}}"##,
        );
        let table = RuleSetTable::load(&source, LanguageId::default());

        assert_eq!(table.get(&LanguageId::from("rust")).color(Category::Import), Some("#333"));
        assert_eq!(table.get(&LanguageId::from("haskell")).color(Category::Keyword), Some("#111"));
    }

    #[test]
    fn test_no_default_gives_empty_set() {
        let source = MemorySource::new().with(RULE_SETS, r##"{"rust": {"keyword": "#222"}}"##);
        let table = RuleSetTable::load(&source, LanguageId::default());
        assert!(table.get(&LanguageId::from("haskell")).is_empty());
    }

    #[test]
    fn test_missing_or_malformed_uses_builtin() {
        let missing = RuleSetTable::load(&MemorySource::new(), LanguageId::default());
        assert_eq!(missing.get(&LanguageId::from("php")).color(Category::Keyword), Some("#ff5370"));

        let source = MemorySource::new().with(RULE_SETS, "[]");
        let malformed = RuleSetTable::load(&source, LanguageId::default());
        assert_eq!(
            malformed.languages().iter().map(|l| l.as_str()).collect::<Vec<_>>(),
            ["php", "python"]
        );
        assert!(!malformed.get(&LanguageId::from("python")).contains(Category::Import));
    }
}
