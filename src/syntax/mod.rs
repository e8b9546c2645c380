//! Syntax highlighting core
//!
//! This module classifies substrings of a line into highlight
//! categories:
//! - `ExtensionResolver` maps a file path to a language id
//! - `LanguageCatalog` loads the language's word lists
//! - `RuleCompiler` turns a rule set and word lists into ordered rules
//! - `highlight` applies the rules to a line, producing spans

mod builtin;
mod catalog;
mod category;
mod compiler;
mod highlighter;
mod language;
mod manager;
mod resolver;
mod rules;
mod ruleset;
mod source;
mod style;

pub use builtin::{BUILTINS, KEYWORDS};
pub use catalog::{LanguageCatalog, WordList, WordLists};
pub use category::Category;
pub use compiler::{CompileOptions, RuleCompiler, SingleQuoteMode};
pub use highlighter::{highlight, paint};
pub use language::LanguageId;
pub use manager::{LanguageBinding, SyntaxManager};
pub use resolver::{ExtensionResolver, MANIFEST};
pub use rules::{CompiledRule, PatternKind};
pub use ruleset::{RuleSet, RuleSetTable, RULE_SETS};
pub use source::{fetch_json, language_resource, read_json, DirSource, MemorySource, ResourceSource};
pub use style::{Format, FormatSpan, StyledRun};
