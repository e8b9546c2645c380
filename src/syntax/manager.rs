//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that wires extension
//! resolution, word-list loading, rule compilation and highlighting
//! together for a set of open buffers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::catalog::LanguageCatalog;
use super::compiler::{CompileOptions, RuleCompiler};
use super::highlighter;
use super::language::LanguageId;
use super::resolver::ExtensionResolver;
use super::rules::CompiledRule;
use super::ruleset::RuleSetTable;
use super::source::ResourceSource;
use super::style::{FormatSpan, StyledRun};

/// The language a buffer is highlighted as, and its compiled rules
///
/// Bindings are immutable. Switching language replaces the whole
/// binding; the rule sequence may be shared with other buffers and
/// threads.
#[derive(Debug, Clone)]
pub struct LanguageBinding {
    pub language: LanguageId,
    pub rules: Arc<[CompiledRule]>,
}

impl LanguageBinding {
    /// Highlight one line with this binding's rules
    pub fn highlight(&self, text: &str) -> Vec<FormatSpan> {
        highlighter::highlight(text, &self.rules)
    }
}

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Where manifests, rule sets and word lists come from
    source: Arc<dyn ResourceSource>,
    /// Word-list loader
    catalog: LanguageCatalog,
    /// Extension to language mapping
    resolver: ExtensionResolver,
    /// Rule compiler
    compiler: RuleCompiler,
    /// Fallback language
    default: LanguageId,
    /// Compiled rules per language (dropped by `reload`)
    compiled: HashMap<LanguageId, Arc<[CompiledRule]>>,
    /// Per-buffer bindings (buffer index -> binding)
    buffers: HashMap<usize, LanguageBinding>,
    /// Filenames of buffers whose language was detected, re-resolved by `reload`
    paths: HashMap<usize, PathBuf>,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl SyntaxManager {
    /// Create a manager over a resource source
    pub fn new(source: Arc<dyn ResourceSource>, default: LanguageId, options: CompileOptions) -> Self {
        let resolver = ExtensionResolver::load(source.as_ref(), default.clone());
        Self {
            catalog: LanguageCatalog::new(Arc::clone(&source)),
            source,
            resolver,
            compiler: RuleCompiler::new(options),
            default,
            compiled: HashMap::new(),
            buffers: HashMap::new(),
            paths: HashMap::new(),
            enabled: true,
        }
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> LanguageId {
        self.resolver.resolve(filename)
    }

    /// Get the compiled rules for a language, compiling on first use
    pub fn rules_for(&mut self, language: &LanguageId) -> Arc<[CompiledRule]> {
        if let Some(rules) = self.compiled.get(language) {
            return Arc::clone(rules);
        }
        let rules = self.compile_language(language);
        self.compiled.insert(language.clone(), Arc::clone(&rules));
        rules
    }

    /// Compile a language from scratch, bypassing the cache
    pub fn compile_language(&self, language: &LanguageId) -> Arc<[CompiledRule]> {
        let table = RuleSetTable::load(self.source.as_ref(), self.default.clone());
        let words = self.catalog.load(language);
        let rules = self.compiler.compile(table.get(language), &words);
        tracing::debug!(%language, rules = rules.len(), "compiled language");
        Arc::from(rules)
    }

    /// Build a binding for a language
    pub fn bind(&mut self, language: LanguageId) -> LanguageBinding {
        let rules = self.rules_for(&language);
        LanguageBinding { language, rules }
    }

    /// Set language for a buffer based on filename
    ///
    /// Buffers without a filename get the default language.
    pub fn set_buffer_language(&mut self, buffer_idx: usize, filename: Option<&Path>) {
        let language = match filename {
            Some(f) => {
                self.paths.insert(buffer_idx, f.to_path_buf());
                self.detect_language(f)
            }
            None => {
                self.paths.remove(&buffer_idx);
                self.default.clone()
            }
        };
        self.install(buffer_idx, language);
    }

    /// Set language for a buffer explicitly
    ///
    /// The language sticks across `reload`, whatever the buffer's filename.
    pub fn set_buffer_language_id(&mut self, buffer_idx: usize, language: LanguageId) {
        self.paths.remove(&buffer_idx);
        self.install(buffer_idx, language);
    }

    fn install(&mut self, buffer_idx: usize, language: LanguageId) {
        let binding = self.bind(language);
        tracing::debug!(buffer = buffer_idx, language = %binding.language, "buffer language set");
        self.buffers.insert(buffer_idx, binding);
    }

    /// Get the binding of a buffer
    pub fn binding(&self, buffer_idx: usize) -> Option<&LanguageBinding> {
        self.buffers.get(&buffer_idx)
    }

    /// Get the language of a buffer
    pub fn buffer_language(&self, buffer_idx: usize) -> Option<&LanguageId> {
        self.binding(buffer_idx).map(|b| &b.language)
    }

    /// Remove a buffer's binding (when buffer is closed)
    pub fn remove_buffer(&mut self, buffer_idx: usize) {
        self.buffers.remove(&buffer_idx);
        self.paths.remove(&buffer_idx);
    }

    /// Highlight a single line of a buffer
    ///
    /// Returns an empty vec if highlighting is off or the buffer has no
    /// language.
    pub fn highlight_line(&self, buffer_idx: usize, text: &str) -> Vec<FormatSpan> {
        if !self.enabled {
            return Vec::new();
        }
        self.binding(buffer_idx)
            .map(|binding| binding.highlight(text))
            .unwrap_or_default()
    }

    /// Highlight a single line and resolve it into styled runs
    pub fn paint_line(&self, buffer_idx: usize, text: &str) -> Vec<StyledRun> {
        highlighter::paint(text, &self.highlight_line(buffer_idx, text))
    }

    /// Re-read every resource and rebind open buffers
    ///
    /// Buffers bound from a filename are resolved again against the new
    /// manifest; the others keep their language.
    pub fn reload(&mut self) {
        self.resolver = ExtensionResolver::load(self.source.as_ref(), self.default.clone());
        self.compiled.clear();

        let languages: Vec<(usize, LanguageId)> = self
            .buffers
            .iter()
            .map(|(idx, binding)| {
                let language = match self.paths.get(idx) {
                    Some(path) => self.resolver.resolve(path),
                    None => binding.language.clone(),
                };
                (*idx, language)
            })
            .collect();
        for (idx, language) in languages {
            let binding = self.bind(language);
            self.buffers.insert(idx, binding);
        }
        tracing::info!(buffers = self.buffers.len(), "reloaded syntax resources");
    }

    /// List languages known to the manifest or the rule-set table
    pub fn list_languages(&self) -> Vec<LanguageId> {
        let table = RuleSetTable::load(self.source.as_ref(), self.default.clone());
        let mut names: Vec<LanguageId> = self
            .resolver
            .languages()
            .into_iter()
            .chain(table.languages())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}
