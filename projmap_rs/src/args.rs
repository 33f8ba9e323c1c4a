//! Command-line argument parsing.
//!
//! Flags-and-positionals parsing over raw argv, no derive machinery. The
//! parsed result is later merged with the config file into [`Options`].

use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::{ColorMode, Mode, OutputMode};

pub struct ParsedArgs {
    pub mode: Mode,
    pub root: PathBuf,
    pub extensions: Option<HashSet<String>>,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
    pub output: OutputMode,
    pub sorted: bool,
    pub color: ColorMode,
    pub verbose: bool,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            mode: Mode::Deps,
            root: PathBuf::from("."),
            extensions: None,
            ignore_patterns: Vec::new(),
            max_depth: None,
            show_hidden: false,
            output: OutputMode::Human,
            sorted: false,
            color: ColorMode::Auto,
            verbose: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn parse_color_mode(raw: &str) -> Result<ColorMode, String> {
    match raw {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err("--color expects auto|always|never".to_string()),
    }
}

pub fn parse_extensions(raw: &str) -> Option<HashSet<String>> {
    let set: HashSet<String> = raw
        .split(',')
        .filter_map(|segment| {
            let trimmed = segment.trim().trim_start_matches('.').to_lowercase();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        })
        .collect();
    if set.is_empty() { None } else { Some(set) }
}

fn parse_depth(raw: &str, flag: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .map_err(|_| format!("{flag} requires a non-negative integer"))
}

fn validate_globs(patterns: &[String], flag: &str) -> Result<(), String> {
    for pat in patterns {
        if pat.trim().is_empty() {
            continue;
        }
        globset::Glob::new(pat).map_err(|e| format!("{flag}: invalid glob '{pat}': {e}"))?;
    }
    Ok(())
}

/// Parse the process arguments (skipping argv[0]).
pub fn parse_args() -> Result<ParsedArgs, String> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    parse_arg_list(&args)
}

/// Parse an explicit argument list. Split out of [`parse_args`] so tests can
/// drive the parser without touching the process environment.
pub fn parse_arg_list(args: &[String]) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();
    let mut roots: Vec<PathBuf> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--deps" => {
                parsed.mode = Mode::Deps;
                i += 1;
            }
            "--tree" => {
                parsed.mode = Mode::Tree;
                i += 1;
            }
            "--ext" => {
                let value = expect_value(args, i, "--ext")?;
                parsed.extensions = parse_extensions(value);
                i += 2;
            }
            "-I" | "--ignore" => {
                let value = expect_value(args, i, "--ignore")?;
                parsed.ignore_patterns.push(value.to_string());
                i += 2;
            }
            "-L" | "--max-depth" => {
                let value = expect_value(args, i, "--max-depth")?;
                parsed.max_depth = Some(parse_depth(value, "--max-depth")?);
                i += 2;
            }
            "-H" | "--show-hidden" => {
                parsed.show_hidden = true;
                i += 1;
            }
            "--json" => {
                parsed.output = OutputMode::Json;
                i += 1;
            }
            "--sorted" => {
                parsed.sorted = true;
                i += 1;
            }
            "--color" => {
                let value = expect_value(args, i, "--color")?;
                parsed.color = parse_color_mode(value)?;
                i += 2;
            }
            "--verbose" => {
                parsed.verbose = true;
                i += 1;
            }
            "--help" | "-h" => {
                parsed.show_help = true;
                i += 1;
            }
            "--version" | "-V" => {
                parsed.show_version = true;
                i += 1;
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {other} (see --help)"));
            }
            positional => {
                roots.push(PathBuf::from(positional));
                i += 1;
            }
        }
    }

    match roots.len() {
        0 => {}
        1 => parsed.root = roots.remove(0),
        _ => return Err("Expected a single root directory".to_string()),
    }

    validate_globs(&parsed.ignore_patterns, "--ignore")?;
    Ok(parsed)
}

fn expect_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}
