//! lexlight - highlight source files in the terminal

use std::env;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use lexlight::error::{HighlightError, Result};
use lexlight::syntax::LanguageId;
use lexlight::terminal::Terminal;
use lexlight::{logging, Config};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    language: Option<String>,
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    spans: bool,
    list_languages: bool,
    no_color: bool,
    verbose: bool,
    files: Vec<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    logging::init(options.verbose);

    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    if let Some(dir) = &options.data_dir {
        config.data_dir = dir.clone();
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let mut manager = config.manager();
    if options.list_languages {
        for language in manager.list_languages() {
            println!("{}", language);
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let color = stdout.is_terminal() && !options.no_color;
    let mut term = Terminal::new(stdout.lock(), color);

    for (idx, path) in options.files.iter().enumerate() {
        match &options.language {
            Some(language) => manager.set_buffer_language_id(idx, LanguageId::from(language.as_str())),
            None => manager.set_buffer_language(idx, Some(path)),
        }

        let text = read_file(path)?;
        for (line_no, line) in text.lines().enumerate() {
            if options.spans {
                term.write_spans(line_no + 1, line, &manager.highlight_line(idx, line))?;
            } else {
                term.write_line(line, &manager.paint_line(idx, line))?;
            }
        }
        manager.remove_buffer(idx);
    }

    term.flush()
}

/// Parse arguments; `Ok(None)` means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("lexlight {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--lang" | "-l" => options.language = Some(value_of(arg, iter.next())?),
            "--config" | "-c" => options.config = Some(PathBuf::from(value_of(arg, iter.next())?)),
            "--data" | "-d" => options.data_dir = Some(PathBuf::from(value_of(arg, iter.next())?)),
            "--spans" => options.spans = true,
            "--list-languages" => options.list_languages = true,
            "--no-color" => options.no_color = true,
            "--verbose" | "-v" => options.verbose = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(HighlightError::Message(format!("unknown option: {flag}")));
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }

    if options.files.is_empty() && !options.list_languages {
        return Err(HighlightError::Message(
            "no input files (try --help)".to_string(),
        ));
    }
    Ok(Some(options))
}

fn value_of(flag: &str, value: Option<&String>) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| HighlightError::Message(format!("{flag} needs a value")))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HighlightError::FileNotFound(path.display().to_string()),
        _ => e.into(),
    })
}

fn print_usage() {
    println!("lexlight {} - syntax highlighting for the terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lexlight [OPTIONS] FILE...");
    println!();
    println!("Options:");
    println!("  -l, --lang ID      Highlight as language ID instead of detecting it");
    println!("  -c, --config FILE  Read configuration from FILE (default ~/.lexlight.toml)");
    println!("  -d, --data DIR     Read manifest, rule sets and word lists from DIR");
    println!("      --spans        Print raw spans instead of colored text");
    println!("      --list-languages  List languages known to the data directory");
    println!("      --no-color     Never emit color");
    println!("  -v, --verbose      Log debug output to stderr (or set RUST_LOG)");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
}
