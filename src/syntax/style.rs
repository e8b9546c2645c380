//! Format types for highlighted text
//!
//! A `Format` is what a compiled rule paints; a `FormatSpan` is one
//! application of it to a block of text. All offsets are byte offsets
//! into the block.

use std::sync::Arc;

use super::category::Category;

/// Display attributes for one category
///
/// The color is opaque to the core (usually a hex code); resolving it
/// is the renderer's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    /// Color value from the rule set
    pub color: Arc<str>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Format {
    /// Create a plain format with just a color
    pub fn new(color: &str) -> Self {
        Self {
            color: Arc::from(color),
            bold: false,
            italic: false,
        }
    }

    /// Create the format for a category, applying its emphasis
    pub fn for_category(category: Category, color: &str) -> Self {
        let mut format = Self::new(color);
        if category.is_bold() {
            format = format.with_bold();
        }
        if category.is_italic() {
            format = format.with_italic();
        }
        format
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A formatted range produced by one rule matching in one block
///
/// Spans are neither merged nor deduplicated; see `paint` for the
/// composed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpan {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Category of the rule that produced this span
    pub category: Category,
    /// Format to apply
    pub format: Format,
}

impl FormatSpan {
    /// Create a new span
    pub fn new(start: usize, len: usize, category: Category, format: Format) -> Self {
        Self {
            start,
            len,
            category,
            format,
        }
    }

    /// Byte offset one past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A contiguous run of text with a single resolved format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Byte offset where this run starts (inclusive)
    pub start: usize,
    /// Byte offset where this run ends (exclusive)
    pub end: usize,
    /// Winning category, if any rule touched this run
    pub category: Option<Category>,
    /// Winning format, None for unhighlighted text
    pub format: Option<Format>,
}

impl StyledRun {
    /// Get the text this run covers
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}
