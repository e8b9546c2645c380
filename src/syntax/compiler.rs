//! Rule compilation
//!
//! Turns a rule set plus a language's word lists into the ordered rule
//! sequence the highlighter paints with. Category order is fixed (see
//! `Category::ORDER`) because later rules win on overlapping bytes.

use serde::Deserialize;

use super::builtin;
use super::catalog::{WordList, WordLists};
use super::category::Category;
use super::rules::{CompiledRule, PatternKind};
use super::ruleset::RuleSet;
use super::style::Format;
use crate::error::Result;

/// How single-quoted strings are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleQuoteMode {
    /// `'.*?` with nothing after the lazy run: only the opening quote is
    /// ever painted. Kept as the default for compatibility.
    #[default]
    Opening,
    /// `'.*?'`: the quote through the next quote on the line.
    Closed,
}

/// Knobs for rule compilation
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub single_quote: SingleQuoteMode,
}

/// Compiles rule sets into ordered rule sequences
#[derive(Debug, Clone, Default)]
pub struct RuleCompiler {
    options: CompileOptions,
}

impl RuleCompiler {
    /// Create a compiler
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compile the rules for every category present in `rule_set`
    ///
    /// A rule whose pattern fails to compile is logged and skipped; the
    /// rest of the sequence is unaffected.
    pub fn compile(&self, rule_set: &RuleSet, words: &WordLists) -> Vec<CompiledRule> {
        let mut rules = Vec::new();

        for category in rule_set.categories() {
            let Some(color) = rule_set.color(category) else {
                continue;
            };
            let format = Format::for_category(category, color);

            let compiled = match category {
                Category::Keyword => {
                    let mut vocab: WordList = builtin::KEYWORDS.iter().copied().collect();
                    for word in words.keywords.iter() {
                        vocab.insert(word);
                    }
                    word_rules(&vocab, category, &format)
                }
                Category::String => self.string_rules(&format),
                Category::Comment => vec![
                    structural("hash_comment", r"#.*", category, &format),
                    structural("slash_comment", r"//.*", category, &format),
                ],
                Category::Number => vec![structural("number", r"\b[0-9]+\b", category, &format)],
                Category::Function => {
                    let mut calls: Vec<_> = words
                        .functions
                        .iter()
                        .map(|word| CompiledRule::call(word, format.clone()))
                        .collect();
                    calls.push(structural("call", r"\b(?P<tok>\w+)\s*\(", category, &format));
                    calls
                }
                Category::Import => word_rules(&words.imports, category, &format),
                Category::Variable => {
                    vec![structural("assignment", r"\b(?P<tok>\w+)\s*=", category, &format)]
                }
                Category::Builtin => {
                    let vocab: WordList = builtin::BUILTINS.iter().copied().collect();
                    word_rules(&vocab, category, &format)
                }
            };

            for rule in compiled {
                match rule {
                    Ok(rule) => rules.push(rule),
                    Err(e) => tracing::warn!(%category, "skipping rule: {}", e),
                }
            }
        }

        tracing::trace!(rules = rules.len(), "compiled rule sequence");
        rules
    }

    fn string_rules(&self, format: &Format) -> Vec<Result<CompiledRule>> {
        let single = match self.options.single_quote {
            SingleQuoteMode::Opening => r"'.*?",
            SingleQuoteMode::Closed => r"'.*?'",
        };
        vec![
            structural("double_string", r#"".*?""#, Category::String, format),
            structural("single_string", single, Category::String, format),
            structural("backtick_string", r"`.*?`", Category::String, format),
        ]
    }
}

fn word_rules(words: &WordList, category: Category, format: &Format) -> Vec<Result<CompiledRule>> {
    words
        .iter()
        .map(|word| CompiledRule::word(word, category, format.clone()))
        .collect()
}

fn structural(name: &str, pattern: &str, category: Category, format: &Format) -> Result<CompiledRule> {
    CompiledRule::new(name, pattern, PatternKind::Structural, category, format.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(rule_set: &RuleSet, words: &WordLists) -> Vec<CompiledRule> {
        RuleCompiler::default().compile(rule_set, words)
    }

    #[test]
    fn test_absent_categories_skipped() {
        assert!(compile(&RuleSet::new(), &WordLists::default()).is_empty());

        let set = RuleSet::new().with(Category::Number, "#f78c6c");
        let rules = compile(&set, &WordLists::default());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].category, Category::Number);
    }

    #[test]
    fn test_rules_grouped_in_category_order() {
        let set = RuleSet::new()
            .with(Category::Builtin, "#1")
            .with(Category::Variable, "#2")
            .with(Category::Import, "#3")
            .with(Category::Function, "#4")
            .with(Category::Number, "#5")
            .with(Category::Comment, "#6")
            .with(Category::String, "#7")
            .with(Category::Keyword, "#8");
        let words = WordLists {
            imports: ["os", "sys"].into_iter().collect(),
            functions: ["len"].into_iter().collect(),
            ..Default::default()
        };
        let rules = compile(&set, &words);

        let mut seen: Vec<Category> = rules.iter().map(|r| r.category).collect();
        seen.dedup();
        assert_eq!(seen, Category::ORDER);
    }

    #[test]
    fn test_keywords_merge_builtin_vocabulary() {
        let set = RuleSet::new().with(Category::Keyword, "#82aaff");
        let words = WordLists {
            keywords: ["def", "fn", "match"].into_iter().collect(),
            ..Default::default()
        };
        let rules = compile(&set, &words);

        assert_eq!(rules.len(), builtin::KEYWORDS.len() + 2);
        assert!(rules.iter().all(|r| r.kind == PatternKind::Word && r.format.bold));
        assert!(rules.iter().any(|r| r.name == "fn"));
    }

    #[test]
    fn test_function_fallback_is_unconditional() {
        let set = RuleSet::new().with(Category::Function, "#ffcb6b");
        let rules = compile(&set, &WordLists::default());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, PatternKind::Structural);
        assert!(rules[0].format.italic);

        let words = WordLists {
            functions: ["print", "len"].into_iter().collect(),
            ..Default::default()
        };
        let rules = compile(&set, &words);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.last().map(|r| r.name.as_str()), Some("call"));
    }

    #[test]
    fn test_builtin_ignores_word_lists() {
        let set = RuleSet::new().with(Category::Builtin, "#b2ccd6");
        let words = WordLists {
            keywords: ["x"].into_iter().collect(),
            functions: ["y"].into_iter().collect(),
            imports: ["z"].into_iter().collect(),
        };
        let rules = compile(&set, &words);
        assert_eq!(rules.len(), builtin::BUILTINS.len());
    }

    #[test]
    fn test_empty_import_list_gives_no_rules() {
        let set = RuleSet::new().with(Category::Import, "#c792ea");
        assert!(compile(&set, &WordLists::default()).is_empty());
    }

    #[test]
    fn test_special_characters_in_words_compile() {
        let set = RuleSet::new().with(Category::Import, "#c792ea");
        let words = WordLists {
            imports: ["c++", "[std]", "a|b", "(", "\\"].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(compile(&set, &words).len(), 5);
    }

    #[test]
    fn test_single_quote_modes() {
        let set = RuleSet::new().with(Category::String, "#c3e88d");

        let opening = compile(&set, &WordLists::default());
        let single = opening.iter().find(|r| r.name == "single_string").unwrap();
        assert_eq!(single.find_all("x = 'abc'"), [(4, 5), (8, 9)]);

        let closed = RuleCompiler::new(CompileOptions {
            single_quote: SingleQuoteMode::Closed,
        })
        .compile(&set, &WordLists::default());
        let single = closed.iter().find(|r| r.name == "single_string").unwrap();
        assert_eq!(single.find_all("x = 'abc'"), [(4, 9)]);
        assert!(single.find_all("'unterminated").is_empty());
    }
}
