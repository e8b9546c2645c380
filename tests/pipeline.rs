//! End-to-end highlighting over a resource directory

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lexlight::syntax::{
    highlight, paint, Category, CompileOptions, DirSource, ExtensionResolver, LanguageCatalog,
    LanguageId, RuleCompiler, RuleSetTable, SyntaxManager,
};
use lexlight::Config;
use tempfile::TempDir;

fn write(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "manifest.json", r#"{".py": "python", ".rs": "rust"}"#);
    write(
        root,
        "highlight.json",
        r##"{
            "python": {"keyword": "#82aaff", "string": "#c3e88d", "comment": "#676e95",
                       "function": "#ffcb6b", "import": "#c792ea", "variable": "#f78c6c",
                       "number": "#f78c6c", "builtin": "#b2ccd6"},
            "rust": {"keyword": "#ff5370", "function": "#82aaff"}
        }"##,
    );
    write(root, "python/imports.json", r#"[{"word": "os", "comment": "OS module"}, "sys"]"#);
    write(root, "python/functions.json", r#"["greet"]"#);
    write(root, "rust/keywords.json", r#"["fn", "let", "mut"]"#);
    write(root, "rust/functions.json", "not json at all");
    dir
}

fn words<'a>(text: &'a str, manager: &SyntaxManager, buffer: usize) -> Vec<(&'a str, Category)> {
    manager
        .paint_line(buffer, text)
        .into_iter()
        .filter_map(|run| run.category.map(|c| (&text[run.start..run.end], c)))
        .collect()
}

#[test]
fn test_components_compose() {
    let dir = data_dir();
    let source = DirSource::new(dir.path());

    let resolver = ExtensionResolver::load(&source, LanguageId::default());
    let language = resolver.resolve(Path::new("src/Main.RS"));
    assert_eq!(language.as_str(), "rust");

    let lists = LanguageCatalog::new(Arc::new(source.clone())).load(&language);
    assert_eq!(lists.keywords.len(), 3);
    assert!(lists.functions.is_empty());

    let table = RuleSetTable::load(&source, LanguageId::default());
    let rules = RuleCompiler::default().compile(table.get(&language), &lists);

    let text = "let mut total = sum(values);";
    let runs = paint(text, &highlight(text, &rules));
    let found: Vec<_> = runs
        .iter()
        .filter_map(|run| run.category.map(|c| (run.text(text), c)))
        .collect();
    assert_eq!(
        found,
        [("let", Category::Keyword), ("mut", Category::Keyword), ("sum", Category::Function)]
    );
}

#[test]
fn test_python_line() {
    let dir = data_dir();
    let mut manager = SyntaxManager::new(
        Arc::new(DirSource::new(dir.path())),
        LanguageId::default(),
        CompileOptions::default(),
    );
    manager.set_buffer_language(0, Some(Path::new("app.py")));

    assert_eq!(
        words("import os  # stdlib", &manager, 0),
        [
            ("import", Category::Keyword),
            ("os", Category::Import),
            ("# stdlib", Category::Comment),
        ]
    );
    assert_eq!(
        words("count = len(items) + 10", &manager, 0),
        [
            ("count", Category::Variable),
            ("len", Category::Builtin),
            ("10", Category::Number),
        ]
    );
    assert_eq!(
        words("greet (name)", &manager, 0),
        [("greet", Category::Function)]
    );
}

#[test]
fn test_unknown_extension_uses_default_language() {
    let dir = data_dir();
    let mut manager = SyntaxManager::new(
        Arc::new(DirSource::new(dir.path())),
        LanguageId::default(),
        CompileOptions::default(),
    );
    manager.set_buffer_language(0, Some(Path::new("notes.unknown")));
    assert_eq!(manager.buffer_language(0).map(|l| l.as_str()), Some("python"));
    assert_eq!(words("while True:", &manager, 0).len(), 2);
}

#[test]
fn test_reload_picks_up_new_words() {
    let dir = data_dir();
    let mut manager = SyntaxManager::new(
        Arc::new(DirSource::new(dir.path())),
        LanguageId::default(),
        CompileOptions::default(),
    );
    manager.set_buffer_language(0, Some(Path::new("app.py")));
    assert!(words("import json", &manager, 0)
        .iter()
        .all(|(_, c)| *c == Category::Keyword));

    write(dir.path(), "python/imports.json", r#"["os", "sys", "json"]"#);
    manager.reload();
    assert_eq!(
        words("import json", &manager, 0),
        [("import", Category::Keyword), ("json", Category::Import)]
    );
}

#[test]
fn test_reload_follows_manifest_changes() {
    let dir = data_dir();
    let mut manager = SyntaxManager::new(
        Arc::new(DirSource::new(dir.path())),
        LanguageId::default(),
        CompileOptions::default(),
    );
    manager.set_buffer_language(0, Some(Path::new("build.py")));
    manager.set_buffer_language_id(1, LanguageId::from("python"));

    write(dir.path(), "manifest.json", r#"{".py": "rust", ".rs": "rust"}"#);
    manager.reload();

    assert_eq!(manager.buffer_language(0).map(|l| l.as_str()), Some("rust"));
    assert_eq!(manager.buffer_language(1).map(|l| l.as_str()), Some("python"));
    assert_eq!(
        words("let x = 1", &manager, 0),
        [("let", Category::Keyword)]
    );
}

#[test]
fn test_missing_data_dir_still_highlights() {
    let dir = TempDir::new().unwrap();
    let mut manager = SyntaxManager::new(
        Arc::new(DirSource::new(dir.path().join("absent"))),
        LanguageId::default(),
        CompileOptions::default(),
    );
    manager.set_buffer_language(0, Some(Path::new("x.py")));
    // built-in rule sets and vocabularies still apply
    assert_eq!(
        words("return 'x'", &manager, 0),
        [("return", Category::Keyword), ("'", Category::String), ("'", Category::String)]
    );
}

#[test]
fn test_config_file_drives_manager() {
    let dir = data_dir();
    let config_path = dir.path().join("lexlight.toml");
    fs::write(&config_path, "data-dir = \".\"\nsingle-quote = \"closed\"\n").unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let mut manager = config.manager();
    manager.set_buffer_language(0, Some(Path::new("app.py")));
    assert_eq!(
        words("name = 'ok'", &manager, 0),
        [("name", Category::Variable), ("'ok'", Category::String)]
    );
}
