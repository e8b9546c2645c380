//! Built-in vocabularies
//!
//! These words are compiled in for every language, on top of whatever
//! the language's own word lists supply.

/// Generic keyword vocabulary, merged with each language's keyword list
pub const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "False", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "None",
    "nonlocal", "not", "or", "pass", "raise", "return", "True", "try", "while", "with", "yield",
];

/// Scalar and collection type names (and a few ubiquitous builtins).
/// The builtin category only ever uses this list.
pub const BUILTINS: &[&str] = &[
    "print", "len", "range", "str", "int", "float", "list", "dict", "set", "tuple", "open",
];
