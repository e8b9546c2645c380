//! Compiled match rules
//!
//! A `CompiledRule` binds a regex to the category and format it paints.
//! Patterns that need a trailing context (a call's `(`, an assignment's
//! `=`) consume it and mark the highlighted token with a `tok` group.

use regex::Regex;

use super::category::Category;
use super::style::{Format, FormatSpan};
use crate::error::{HighlightError, Result};

/// Name of the capture group holding the highlighted token
const TOKEN_GROUP: &str = "tok";

/// Where a rule's pattern came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// A literal word from a word list or built-in vocabulary
    Word,
    /// A fixed pattern (strings, comments, numbers, heuristics)
    Structural,
}

/// A pattern bound to a category and a resolved format
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Word or structural
    pub kind: PatternKind,
    /// Category this rule paints
    pub category: Category,
    /// Format applied to matches
    pub format: Format,
    /// Whether the pattern marks its token with a capture group
    has_token: bool,
}

impl CompiledRule {
    /// Compile a rule from a raw pattern
    pub fn new(
        name: &str,
        pattern: &str,
        kind: PatternKind,
        category: Category,
        format: Format,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HighlightError::Pattern {
            rule: name.to_string(),
            source,
        })?;
        let has_token = pattern.capture_names().any(|n| n == Some(TOKEN_GROUP));
        Ok(Self {
            name: name.to_string(),
            pattern,
            kind,
            category,
            format,
            has_token,
        })
    }

    /// Compile a rule matching a literal word at token boundaries
    pub fn word(word: &str, category: Category, format: Format) -> Result<Self> {
        let pattern = format!(r"\b{{start-half}}{}\b{{end-half}}", regex::escape(word));
        Self::new(word, &pattern, PatternKind::Word, category, format)
    }

    /// Compile a rule matching a literal word used as a call, `word (`
    pub fn call(word: &str, format: Format) -> Result<Self> {
        let pattern = format!(
            r"\b{{start-half}}(?P<{TOKEN_GROUP}>{})\b{{end-half}}\s*\(",
            regex::escape(word)
        );
        Self::new(word, &pattern, PatternKind::Word, Category::Function, format)
    }

    /// Find the byte ranges this rule paints in a block of text
    ///
    /// Matches of one rule never overlap each other; empty matches are
    /// dropped.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let ranges: Vec<(usize, usize)> = if self.has_token {
            self.pattern
                .captures_iter(text)
                .filter_map(|caps| caps.name(TOKEN_GROUP).or_else(|| caps.get(0)))
                .map(|m| (m.start(), m.end()))
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect()
        };
        ranges.into_iter().filter(|(start, end)| end > start).collect()
    }

    /// Apply this rule to a block of text, producing its spans
    pub fn spans(&self, text: &str) -> Vec<FormatSpan> {
        self.find_all(text)
            .into_iter()
            .map(|(start, end)| FormatSpan::new(start, end - start, self.category, self.format.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt() -> Format {
        Format::new("#fff")
    }

    #[test]
    fn test_word_boundaries() {
        let rule = CompiledRule::word("def", Category::Keyword, fmt()).unwrap();
        assert_eq!(rule.find_all("def f(): pass"), [(0, 3)]);
        assert!(rule.find_all("definitely undef _def def_").is_empty());
        assert_eq!(rule.find_all("(def)"), [(1, 4)]);
    }

    #[test]
    fn test_word_is_escaped() {
        let rule = CompiledRule::word("a+b", Category::Keyword, fmt()).unwrap();
        assert_eq!(rule.find_all("x a+b y aab"), [(2, 5)]);

        let rule = CompiledRule::word("(", Category::Keyword, fmt()).unwrap();
        assert_eq!(rule.find_all("x ( y"), [(2, 3)]);
    }

    #[test]
    fn test_word_with_sigil() {
        let rule = CompiledRule::word("$this", Category::Keyword, fmt()).unwrap();
        assert_eq!(rule.find_all("return $this;"), [(7, 12)]);
        assert!(rule.find_all("$thisOne").is_empty());
    }

    #[test]
    fn test_call_marks_only_the_word() {
        let rule = CompiledRule::call("print", fmt()).unwrap();
        assert_eq!(rule.find_all("print  (x)"), [(0, 5)]);
        assert!(rule.find_all("print x").is_empty());
        assert!(rule.find_all("reprint(x)").is_empty());
    }

    #[test]
    fn test_structural_rule() {
        let rule = CompiledRule::new(
            "number",
            r"\b[0-9]+\b",
            PatternKind::Structural,
            Category::Number,
            fmt(),
        )
        .unwrap();
        assert_eq!(rule.find_all("a 12 b3 45"), [(2, 4), (8, 10)]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = CompiledRule::new("bad", "(", PatternKind::Structural, Category::String, fmt());
        assert!(matches!(result, Err(HighlightError::Pattern { .. })));
    }

    #[test]
    fn test_empty_matches_dropped() {
        let rule =
            CompiledRule::new("empty", r"x*", PatternKind::Structural, Category::String, fmt()).unwrap();
        assert_eq!(rule.find_all("axxb"), [(1, 3)]);
    }

    #[test]
    fn test_spans_carry_format() {
        let rule = CompiledRule::word("if", Category::Keyword, fmt().with_bold()).unwrap();
        let spans = rule.spans("if x: if");
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[1].start, spans[1].len), (6, 2));
        assert!(spans[0].format.bold);
        assert_eq!(spans[0].category, Category::Keyword);
    }
}
