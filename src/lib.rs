//! lexlight - per-line, word-list driven syntax highlighting
//!
//! Resolve a language from a file name, compile its rules once, then
//! highlight each line independently:
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use lexlight::syntax::{CompileOptions, DirSource, LanguageId, SyntaxManager};
//!
//! let source = Arc::new(DirSource::new("data"));
//! let mut manager = SyntaxManager::new(source, LanguageId::default(), CompileOptions::default());
//! manager.set_buffer_language(0, Some(Path::new("main.py")));
//! let spans = manager.highlight_line(0, "def main(): return 0");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod syntax;
pub mod terminal;

pub use config::Config;
pub use error::{HighlightError, Result};
